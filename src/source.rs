//! Source files read from the project tree

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Which side of the library a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// A header: declarations, emitted unconditionally.
    Interface,
    /// A translation unit: emitted behind the implementation guard.
    Implementation,
}

/// A project file with its full content.
///
/// The basename is the file's identity in the include graph, matching the
/// way sources refer to each other with `#include "Name.h"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub basename: String,
    pub kind: FileKind,
    pub content: String,
}

impl SourceFile {
    /// Build a file from in-memory content.
    pub fn new<P: AsRef<Path>>(path: P, kind: FileKind, content: impl Into<String>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let basename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::Path {
                message: format!("No UTF-8 file name in '{}'", path.display()),
            })?
            .to_string();

        Ok(Self {
            path,
            basename,
            kind,
            content: content.into(),
        })
    }

    /// Read a file from disk.
    pub fn read<P: AsRef<Path>>(path: P, kind: FileKind) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::Filesystem {
            message: format!("Failed to read '{}': {}", path.display(), e),
        })?;
        Self::new(path, kind, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_basename_from_nested_path() {
        let file = SourceFile::new("include/dsp/Filter.h", FileKind::Interface, "").unwrap();
        assert_eq!(file.basename, "Filter.h");
        assert_eq!(file.kind, FileKind::Interface);
    }

    #[test]
    fn test_path_without_basename() {
        let err = SourceFile::new("/", FileKind::Interface, "").unwrap_err();
        assert!(matches!(err, Error::Path { .. }));
    }

    #[test]
    fn test_read_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Gain.cpp");
        std::fs::write(&path, "void f() {}\n").unwrap();

        let file = SourceFile::read(&path, FileKind::Implementation).unwrap();
        assert_eq!(file.basename, "Gain.cpp");
        assert_eq!(file.content, "void f() {}\n");
    }

    #[test]
    fn test_read_missing_file() {
        let err = SourceFile::read("/nonexistent/Gain.cpp", FileKind::Implementation).unwrap_err();
        assert!(err.to_string().contains("Gain.cpp"));
    }
}
