//! Phase 1: Discovery
//!
//! This is the first phase of the `single-header` pipeline. It finds every
//! interface file under the include root and every implementation file under
//! the source root, then reads them into memory.
//!
//! ## Process
//!
//! 1.  **Walk**: Each root is walked recursively with `walkdir`. A file is
//!     kept when its name ends with one of the configured extensions.
//!
//! 2.  **Exclude**: Files whose basename matches an exclusion pattern are
//!     skipped entirely (typically a local `main.cpp` used to try the library
//!     out). Other files may still include an excluded file; that include is
//!     simply unresolved later on.
//!
//! 3.  **Sort**: Paths are sorted as whole strings (not component by
//!     component), so `a.b.cpp` comes before `a/x.cpp` and discovery order
//!     is stable across platforms and runs.
//!
//! A missing root directory or an unreadable file aborts the run.

use std::path::{Path, PathBuf};

use glob::Pattern;
use log::debug;
use walkdir::WalkDir;

use super::DiscoveredFiles;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::source::{FileKind, SourceFile};

/// Executes Phase 1 of the pipeline.
pub fn execute(config: &Config) -> Result<DiscoveredFiles> {
    let exclude = config.exclude_patterns()?;

    let interface = read_files(
        &config.include_dir,
        &config.header_extensions,
        &exclude,
        FileKind::Interface,
    )?;
    let implementation = read_files(
        &config.source_dir,
        &config.source_extensions,
        &exclude,
        FileKind::Implementation,
    )?;

    debug!(
        "discovered {} interface and {} implementation files",
        interface.len(),
        implementation.len()
    );

    Ok(DiscoveredFiles {
        interface,
        implementation,
    })
}

fn read_files(
    root: &Path,
    extensions: &[String],
    exclude: &[Pattern],
    kind: FileKind,
) -> Result<Vec<SourceFile>> {
    find_project_files(root, extensions, exclude)?
        .into_iter()
        .map(|path| SourceFile::read(path, kind))
        .collect()
}

/// Recursively list files under `root` whose name ends with one of
/// `extensions` and whose basename matches none of `exclude`, sorted by the
/// full path string.
pub fn find_project_files(
    root: &Path,
    extensions: &[String],
    exclude: &[Pattern],
) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::Filesystem {
            message: format!("Directory not found: {}", root.display()),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            debug!("skipping non UTF-8 file name {}", entry.path().display());
            continue;
        };

        if !extensions.iter().any(|ext| name.ends_with(ext.as_str())) {
            continue;
        }

        if exclude.iter().any(|pattern| pattern.matches(name)) {
            debug!("excluding {}", entry.path().display());
            continue;
        }

        files.push(entry.into_path());
    }

    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(files)
}
