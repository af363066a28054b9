//! Orchestrator for the complete build
//!
//! This module coordinates all phases to provide a clean API for building,
//! checking and inspecting a single-header artifact.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::debug;

use super::{assembly, phase1, phase2, phase3, phase4, phase5, OrderedFiles};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::scan::DependencyScanner;

/// Result of generating an artifact in memory.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Complete artifact text.
    pub artifact: String,
    /// Where the artifact belongs.
    pub output_path: PathBuf,
    pub interface_files: usize,
    pub implementation_files: usize,
    pub external_includes: usize,
}

/// State of the artifact on disk compared to freshly generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    UpToDate,
    Stale,
    Missing,
}

/// Run Phases 1-4 and return the artifact without touching the disk.
pub fn generate(config: &Config, date: NaiveDate) -> Result<Generated> {
    // Phase 1: Discovery
    let discovered = phase1::execute(config)?;

    // Phase 2: Ordering
    let scanner = DependencyScanner::new()?;
    let ordered = phase2::execute(discovered.interface, &scanner);
    debug!("interface order: {}", ordered.basenames().join(", "));

    // Phase 3: Processing
    let processed = phase3::execute(&ordered, &discovered.implementation, config.namespace())?;

    // Phase 4: Assembly
    let artifact = phase4::execute(&processed, config, date);

    Ok(Generated {
        artifact,
        output_path: config.output_path(),
        interface_files: processed.interface.len(),
        implementation_files: processed.implementation.len(),
        external_includes: processed.external_includes.len(),
    })
}

/// Execute the complete build (Phases 1-5).
///
/// If `write` is false the artifact is generated but not written.
pub fn execute_build(config: &Config, date: NaiveDate, write: bool) -> Result<Generated> {
    let generated = generate(config, date)?;

    // Phase 5: Write to Disk
    if write {
        phase5::execute(&generated.artifact, &generated.output_path)?;
    }

    Ok(generated)
}

/// Compare the artifact on disk with a fresh build, ignoring the date line.
pub fn execute_check(config: &Config, date: NaiveDate) -> Result<CheckStatus> {
    let generated = generate(config, date)?;
    compare(&generated.artifact, &generated.output_path)
}

fn compare(artifact: &str, output_path: &Path) -> Result<CheckStatus> {
    if !output_path.exists() {
        return Ok(CheckStatus::Missing);
    }
    let existing = std::fs::read_to_string(output_path).map_err(|e| Error::Filesystem {
        message: format!("Failed to read '{}': {}", output_path.display(), e),
    })?;

    if assembly::without_generation_date(&existing) == assembly::without_generation_date(artifact)
    {
        Ok(CheckStatus::UpToDate)
    } else {
        Ok(CheckStatus::Stale)
    }
}

/// Run Phases 1-2 and return the interface order.
pub fn execute_order(config: &Config) -> Result<OrderedFiles> {
    let discovered = phase1::execute(config)?;
    let scanner = DependencyScanner::new()?;
    Ok(phase2::execute(discovered.interface, &scanner))
}
