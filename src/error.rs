//! # Error Handling
//!
//! This module defines the centralized error type for `single-header`. It
//! uses `thiserror` to derive a descriptive `Error` enum covering every
//! failure that can stop a run.
//!
//! Only two classes of problem are errors:
//!
//! - Configuration problems (unparseable YAML, invalid project names, bad
//!   exclusion patterns).
//! - Filesystem failures (missing input directories, unreadable files, an
//!   unwritable output path).
//!
//! Structural oddities in the amalgamated sources (unbalanced namespace
//! blocks, include cycles, includes of unknown files) are not represented
//! here: the pipeline logs a warning and carries on.

use thiserror::Error;

/// Main error type for single-header operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file or command-line overrides are invalid.
    ///
    /// Includes an optional hint about how to fix the problem.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A filesystem operation on project inputs or the output artifact failed.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// A path could not be interpreted (e.g. a file without a basename).
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// A glob pattern error from an exclusion entry.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// A directory walk error, wrapped from `walkdir::Error`.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
