//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `single-header` command-line tool. Each subcommand is defined in its own
//! file.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`. Configuration options shared by all commands come
//!   from [`ConfigArgs`], flattened into each `Args` struct.
//! - An `execute` function that takes the parsed `Args` and calls into the
//!   `single_header` library.

pub mod build;
pub mod check;
pub mod order;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use single_header::config::{self, Config, Overrides, DEFAULT_CONFIG_FILE};

/// Configuration file location and per-option overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to config file (defaults to .single-header.yaml)
    #[arg(short, long, value_name = "PATH", env = "SINGLE_HEADER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project name; enables running without a config file
    #[arg(long, value_name = "NAME")]
    pub project: Option<String>,

    /// Interface (header) root directory
    #[arg(long, value_name = "DIR")]
    pub include_dir: Option<PathBuf>,

    /// Implementation (source) root directory
    #[arg(long, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Output artifact path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Basename (or glob) to exclude; may be repeated
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Implementation guard macro
    #[arg(long, value_name = "MACRO")]
    pub implementation_guard: Option<String>,
}

impl ConfigArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            project: self.project.clone(),
            include_dir: self.include_dir.clone(),
            source_dir: self.source_dir.clone(),
            output: self.output.clone(),
            exclude: self.exclude.clone(),
            implementation_guard: self.implementation_guard.clone(),
        }
    }

    /// Load the configuration file and apply command-line overrides.
    ///
    /// Without a config file, `--project` alone is enough to run with
    /// defaults. An explicitly named config file must exist.
    pub fn load(&self) -> Result<Config> {
        let path = self
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let base = if path.exists() {
            config::from_file(&path)?
        } else {
            match (&self.config, &self.project) {
                (None, Some(project)) => Config::new(project.clone()),
                _ => anyhow::bail!("Configuration file not found: {}", path.display()),
            }
        };

        Ok(self.overrides().apply(base)?)
    }
}

/// The date stamped into the artifact banner.
///
/// Honors `SOURCE_DATE_EPOCH` for reproducible builds, otherwise today's
/// local date.
pub fn generation_date() -> Result<NaiveDate> {
    match std::env::var("SOURCE_DATE_EPOCH") {
        Ok(raw) => {
            let secs: i64 = raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid SOURCE_DATE_EPOCH '{}'", raw))?;
            let stamp = chrono::DateTime::from_timestamp(secs, 0)
                .ok_or_else(|| anyhow::anyhow!("SOURCE_DATE_EPOCH out of range: {}", secs))?;
            Ok(stamp.date_naive())
        }
        Err(_) => Ok(chrono::Local::now().date_naive()),
    }
}
