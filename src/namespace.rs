//! Namespace block removal
//!
//! Every project file wraps its content in `namespace <Name> { ... }`. Once
//! all files are concatenated into one artifact the wrapper is emitted once
//! around everything, so the per-file wrapper has to go.
//!
//! This is line-oriented brace counting, not parsing:
//!
//! - Only an opening line of the form `namespace <Name> {` (brace on the same
//!   line) is recognized. A brace on the following line is not.
//! - Braces inside string literals and comments are counted like any other.
//! - Only the first matching block is removed.
//!
//! When the block's closing brace can't be found the content is returned
//! untouched.

use std::borrow::Cow;

use log::warn;
use regex::Regex;

use crate::error::Result;

/// Removes the first top-level `namespace <Name> { ... }` wrapper.
#[derive(Debug, Clone)]
pub struct NamespaceStripper {
    name: String,
    opening: Regex,
}

impl NamespaceStripper {
    pub fn new(name: &str) -> Result<Self> {
        let pattern = format!(r"^\s*namespace\s+{}\s*\{{", regex::escape(name));
        Ok(Self {
            name: name.to_string(),
            opening: Regex::new(&pattern)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Strip the wrapper from `content`.
    ///
    /// Returns `Cow::Borrowed` (byte-identical input) when there is no
    /// matching opening line or when it never balances. Otherwise the opening
    /// and closing lines are dropped, everything else is kept verbatim and
    /// lines are re-joined with `\n`.
    pub fn strip<'a>(&self, content: &'a str) -> Cow<'a, str> {
        let lines: Vec<&str> = content.lines().collect();

        let Some(start) = lines.iter().position(|line| self.opening.is_match(line)) else {
            return Cow::Borrowed(content);
        };

        let Some(end) = closing_line(&lines, start) else {
            warn!(
                "namespace {} opened on line {} is never closed; leaving content unchanged",
                self.name,
                start + 1
            );
            return Cow::Borrowed(content);
        };

        let kept: Vec<&str> = lines[..start]
            .iter()
            .chain(&lines[start + 1..end])
            .chain(&lines[end + 1..])
            .copied()
            .collect();
        Cow::Owned(kept.join("\n"))
    }
}

/// Index of the line where the brace depth first returns to zero, counting
/// from depth 1 on the line after `start`.
fn closing_line(lines: &[&str], start: usize) -> Option<usize> {
    let mut depth: i64 = 1;
    for (idx, line) in lines.iter().enumerate().skip(start + 1) {
        depth += line.matches('{').count() as i64;
        depth -= line.matches('}').count() as i64;
        if depth == 0 {
            return Some(idx);
        }
    }
    None
}
