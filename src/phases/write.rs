//! Phase 5: Writing to Disk
//!
//! This is the final phase of the `single-header` pipeline. It writes the
//! rendered artifact to the configured output path.
//!
//! ## Process
//!
//! 1.  **Create Directories**: Creates the parent directory of the output
//!     path if it doesn't exist.
//!
//! 2.  **Write Temporary File**: Writes the full text to a hidden sibling
//!     file (`.<name>.tmp`) in the same directory.
//!
//! 3.  **Rename**: Moves the temporary file over the output path. A failed
//!     run never leaves a half-written artifact behind.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Error, Result};

/// Executes Phase 5: atomically replace `output_path` with `artifact`.
pub fn execute(artifact: &str, output_path: &Path) -> Result<()> {
    let parent = output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
        message: format!("Failed to create directory '{}': {}", parent.display(), e),
    })?;

    let tmp_path = temporary_path(output_path)?;
    if let Err(e) = fs::write(&tmp_path, artifact) {
        let _ = fs::remove_file(&tmp_path);
        return Err(Error::Filesystem {
            message: format!("Failed to write file '{}': {}", tmp_path.display(), e),
        });
    }

    if let Err(e) = fs::rename(&tmp_path, output_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(Error::Filesystem {
            message: format!("Failed to replace '{}': {}", output_path.display(), e),
        });
    }

    info!(
        "wrote {} bytes to {}",
        artifact.len(),
        output_path.display()
    );
    Ok(())
}

fn temporary_path(output_path: &Path) -> Result<PathBuf> {
    let name = output_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::Path {
            message: format!("Output path has no file name: {}", output_path.display()),
        })?;
    Ok(output_path.with_file_name(format!(".{}.tmp", name)))
}
