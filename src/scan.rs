//! Local include discovery
//!
//! A local include is a line that, after optional leading whitespace, starts
//! with `#include` followed by a double-quoted path. The scanner reduces each
//! quoted path to its basename and returns them in the order they appear.
//! Nothing is resolved against the filesystem here; names that don't match a
//! known interface file are dropped later by the orderer.

use std::path::Path;

use regex::Regex;

use crate::error::Result;

/// Extracts locally-referenced companion files from source text.
#[derive(Debug, Clone)]
pub struct DependencyScanner {
    local_include: Regex,
}

impl DependencyScanner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            local_include: Regex::new(r#"(?m)^[ \t]*#include\s*"(.*?)""#)?,
        })
    }

    /// Basenames of every local include in `content`, duplicates kept.
    pub fn scan(&self, content: &str) -> Vec<String> {
        self.local_include
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .filter_map(|m| basename(m.as_str()))
            .collect()
    }
}

fn basename(path: &str) -> Option<String> {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
}
