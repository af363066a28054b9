//! Shared test utilities for integration and E2E tests.
//!
//! This module provides fixtures and helpers to reduce duplication across
//! test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_chain_project();
//!     fixture.command().arg("build").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{configs, sources, TestFixture};
}

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Minimal valid configuration.
    pub const MINIMAL: &str = "project: Foo\n";

    /// Configuration excluding a local demo entry point.
    pub const WITH_EXCLUDE: &str = r#"
project: Foo
exclude: ["main.cpp"]
"#;

    /// Configuration with an external single-header dependency.
    pub const WITH_DEPENDENCY: &str = r#"
project: Foo
exclude: ["main.cpp"]
dependency:
  header: miniaudio.h
"#;

    /// Configuration with an unknown key.
    pub const UNKNOWN_KEY: &str = "project: Foo\nheaders: include\n";
}

/// Source snippets for a three-header chain `a.h -> b.h -> c.h`.
#[allow(dead_code)]
pub mod sources {
    pub const A_H: &str = r#"#pragma once
#include "b.h"
#include <vector>

namespace Foo {

struct A {
    B b;
    std::vector<int> values;
};

} // namespace Foo
"#;

    pub const B_H: &str = r#"#pragma once
#include "c.h"
#include <string>

namespace Foo {

struct B {
    C c;
    std::string name;
};

} // namespace Foo
"#;

    pub const C_H: &str = r#"#pragma once
#include <vector>

namespace Foo {

struct C {
    int value() const { return 42; }
};

} // namespace Foo
"#;

    pub const A_CPP: &str = r#"#include "../include/a.h"
#include <algorithm>

namespace Foo {

int sum(const A& a) {
    int total = 0;
    for (int v : a.values) {
        total += v;
    }
    return total;
}

} // namespace Foo
"#;

    pub const MAIN_CPP: &str = r#"#include "../include/a.h"
#include <iostream>

int main() {
    std::cout << "demo" << std::endl;
}
"#;
}

/// A test fixture that provides a temporary project directory.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `.single-header.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.with_file(".single-header.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add the `a.h -> b.h -> c.h` project, a source file and a demo
    /// `main.cpp`.
    pub fn with_chain_project(self) -> Self {
        self.with_file("include/a.h", sources::A_H)
            .with_file("include/b.h", sources::B_H)
            .with_file("include/c.h", sources::C_H)
            .with_file("src/a.cpp", sources::A_CPP)
            .with_file("src/main.cpp", sources::MAIN_CPP)
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join(".single-header.yaml")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Read a file from the fixture.
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).expect("Failed to read file")
    }

    /// Create a command configured to run in this fixture's directory, with
    /// a pinned generation date.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("single-header");
        cmd.current_dir(self.path())
            .env("SOURCE_DATE_EPOCH", "1767744000")
            .env_remove("SINGLE_HEADER_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
