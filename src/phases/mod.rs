//! Implementation of the phases of a single-header build.
//!
//! ## Overview
//!
//! A build follows 5 phases:
//! 1. Discovery - Find and read interface and implementation files
//! 2. Ordering - Sort interface files so dependencies come before dependents
//! 3. Processing - Strip the namespace wrapper and classify directives
//! 4. Assembly - Render the artifact text
//! 5. Writing to Disk - Atomically replace the artifact
//!
//! Each phase depends only on the previous phases and the foundation modules
//! (`source`, `scan`, `namespace`, `directive`).

use std::path::PathBuf;

use serde::Serialize;

use crate::directive::ExternalIncludes;
use crate::source::SourceFile;

// Phase modules
pub mod assembly;
pub mod discovery;
pub mod orchestrator;
pub mod ordering;
pub mod processing;
pub mod write;

// Numbered aliases, mirroring the order of execution
pub use discovery as phase1;
pub use ordering as phase2;
pub use processing as phase3;
pub use assembly as phase4;
pub use write as phase5;

/// Files found by Phase 1, each list sorted by path.
#[derive(Debug, Clone, Default)]
pub struct DiscoveredFiles {
    pub interface: Vec<SourceFile>,
    pub implementation: Vec<SourceFile>,
}

/// An interface file in its final position, with the local dependencies that
/// resolved to other interface files.
#[derive(Debug, Clone)]
pub struct OrderedFile {
    pub file: SourceFile,
    pub dependencies: Vec<String>,
}

/// Interface files linearized so that every acyclic dependency precedes its
/// dependent.
#[derive(Debug, Clone, Default)]
pub struct OrderedFiles {
    pub entries: Vec<OrderedFile>,
}

impl OrderedFiles {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn basenames(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|e| e.file.basename.as_str())
            .collect()
    }

    pub fn files(&self) -> impl Iterator<Item = &SourceFile> {
        self.entries.iter().map(|e| &e.file)
    }

    /// Position of `basename` in the order, if present.
    pub fn position(&self, basename: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.file.basename == basename)
    }

    /// Serializable summary used by the `order` command.
    pub fn summary(&self) -> Vec<OrderSummary> {
        self.entries
            .iter()
            .map(|e| OrderSummary {
                basename: e.file.basename.clone(),
                path: e.file.path.clone(),
                dependencies: e.dependencies.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderSummary {
    pub basename: String,
    pub path: PathBuf,
    pub dependencies: Vec<String>,
}

/// A file's content after namespace stripping and directive filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedBody {
    pub basename: String,
    pub text: String,
}

/// Everything Phase 4 needs to render the artifact.
#[derive(Debug, Clone, Default)]
pub struct ProcessedSources {
    /// Interface bodies, in dependency order.
    pub interface: Vec<TransformedBody>,
    /// Implementation bodies, in discovery order.
    pub implementation: Vec<TransformedBody>,
    /// External includes hoisted out of every file.
    pub external_includes: ExternalIncludes,
}
