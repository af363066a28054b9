//! Preprocessor directive classification
//!
//! Each line of a stripped file is sorted into one of four buckets:
//!
//! 1. `#include <...>`: an external include, hoisted to the top of the
//!    artifact and deduplicated.
//! 2. `#include "..."`: a local include, dropped since every local file is
//!    already part of the artifact.
//! 3. `#pragma once`: dropped from interface files, the artifact carries its
//!    own include guard.
//! 4. Anything else: ordinary content, passed through unchanged.
//!
//! Rules are tested in that order.

use std::collections::BTreeSet;

use regex::Regex;

use crate::error::Result;

/// Classification of a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive<'a> {
    /// External include, with surrounding whitespace trimmed.
    External(&'a str),
    /// Local include, carrying the quoted path.
    Local(&'a str),
    /// A `#pragma once` line.
    PragmaOnce,
    /// Any other line, verbatim.
    Ordinary(&'a str),
}

/// Sorts lines into [`Directive`]s.
#[derive(Debug, Clone)]
pub struct DirectiveClassifier {
    external: Regex,
    local: Regex,
    pragma_once: Regex,
}

impl DirectiveClassifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            external: Regex::new(r"^\s*#include\s*<.*?>")?,
            local: Regex::new(r#"^\s*#include\s*"(.*?)""#)?,
            pragma_once: Regex::new(r"^\s*#pragma\s+once\b")?,
        })
    }

    pub fn classify<'a>(&self, line: &'a str) -> Directive<'a> {
        if self.external.is_match(line) {
            return Directive::External(line.trim());
        }
        if let Some(caps) = self.local.captures(line) {
            let path = caps.get(1).map_or("", |m| m.as_str());
            return Directive::Local(path);
        }
        if self.pragma_once.is_match(line) {
            return Directive::PragmaOnce;
        }
        Directive::Ordinary(line)
    }
}

/// Distinct external include directives collected across a run.
///
/// Iteration is in lexicographic order, which is the order the directives
/// are written to the artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalIncludes {
    directives: BTreeSet<String>,
}

impl ExternalIncludes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a directive. Returns `false` if it was already present.
    pub fn insert(&mut self, directive: &str) -> bool {
        self.directives.insert(directive.to_string())
    }

    pub fn contains(&self, directive: &str) -> bool {
        self.directives.contains(directive)
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Directives in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.directives.iter().map(String::as_str)
    }
}
