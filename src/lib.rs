//! # Single-Header Library Builder
//!
//! This library amalgamates a C/C++ library split into `include/` headers and
//! `src/` translation units into one distributable header. Declarations are
//! exposed unconditionally; implementations sit behind an opt-in
//! `<PROJECT>_IMPLEMENTATION` guard, the usual single-header pattern.
//!
//! ## Quick Example
//!
//! ```
//! use single_header::namespace::NamespaceStripper;
//! use single_header::directive::{Directive, DirectiveClassifier};
//!
//! let stripper = NamespaceStripper::new("Foo").unwrap();
//! assert_eq!(stripper.strip("namespace Foo {\nint x;\n}"), "int x;");
//!
//! let classifier = DirectiveClassifier::new().unwrap();
//! assert_eq!(
//!     classifier.classify("#include <vector>"),
//!     Directive::External("#include <vector>")
//! );
//! assert_eq!(classifier.classify("#include \"a.h\""), Directive::Local("a.h"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: The `.single-header.yaml` schema: project
//!   name, source roots, extensions, exclusions, guards and an optional
//!   external single-header dependency.
//! - **Sources (`source`)**: Files read from disk, identified by basename.
//! - **Text Transforms (`scan`, `namespace`, `directive`)**: Line-oriented
//!   pattern matching for local includes, namespace wrappers and
//!   preprocessor directives. Nothing here parses C++.
//! - **Phases (`phases`)**: The pipeline that ties it together.
//!
//! ## Execution Flow
//!
//! The main entry point is `phases::orchestrator`, which executes:
//!
//! 1.  **Discovery**: Find interface and implementation files.
//! 2.  **Ordering**: Sort headers so that included headers come first.
//! 3.  **Processing**: Strip namespace wrappers, hoist `#include <...>`,
//!     drop `#include "..."`.
//! 4.  **Assembly**: Render the artifact.
//! 5.  **Disk Output**: Atomically write it to the output path.

pub mod config;
pub mod directive;
pub mod error;
pub mod namespace;
pub mod phases;
pub mod scan;
pub mod source;

#[cfg(test)]
mod text_proptest;
