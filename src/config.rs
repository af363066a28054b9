//! # Configuration Schema and Parsing
//!
//! This module defines the structure of the `.single-header.yaml` file and
//! the logic for parsing, validating and overriding it.
//!
//! ## Example
//!
//! ```yaml
//! project: MittelVec
//! include_dir: include
//! source_dir: src
//! exclude: ["main.cpp"]
//! output: dist/mittelvec.h
//! dependency:
//!   header: miniaudio.h
//! ```
//!
//! Only `project` is required. Every other key has a default derived from
//! the project name or from the conventional `include/` + `src/` layout.
//! Relative paths are resolved against the directory holding the
//! configuration file, so a run behaves the same from any working directory.

use std::path::{Path, PathBuf};

use glob::Pattern;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name of the configuration file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".single-header.yaml";

/// Keys accepted at the top level of the configuration file.
const KNOWN_KEYS: &[&str] = &[
    "project",
    "namespace",
    "include_dir",
    "source_dir",
    "header_extensions",
    "source_extensions",
    "exclude",
    "output",
    "implementation_guard",
    "dependency",
];

/// An external single-header library the amalgamated artifact depends on.
///
/// The artifact pulls it in once in the declarations region, and again in
/// the implementation region after forcing its own implementation macro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dependency {
    /// Header file name as it should appear in the include directive.
    pub header: String,
    /// Macro that activates the dependency's implementation section.
    #[serde(default)]
    pub implementation_macro: Option<String>,
}

impl Dependency {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            implementation_macro: None,
        }
    }

    /// The implementation macro, defaulting to `<STEM>_IMPLEMENTATION`.
    ///
    /// ```
    /// use single_header::config::Dependency;
    ///
    /// let dep = Dependency::new("miniaudio.h");
    /// assert_eq!(dep.implementation_macro(), "MINIAUDIO_IMPLEMENTATION");
    /// ```
    pub fn implementation_macro(&self) -> String {
        if let Some(name) = &self.implementation_macro {
            return name.clone();
        }
        let stem = Path::new(&self.header)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.header);
        format!("{}_IMPLEMENTATION", to_macro_case(stem))
    }
}

/// Complete configuration for one amalgamation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name, used for the banner and the include guard.
    pub project: String,
    /// Namespace stripped from every file and re-wrapped around the bodies.
    /// Defaults to `project`.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Root of the interface (header) tree.
    #[serde(default = "default_include_dir")]
    pub include_dir: PathBuf,
    /// Root of the implementation (source) tree.
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
    #[serde(default = "default_header_extensions")]
    pub header_extensions: Vec<String>,
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
    /// Basename glob patterns skipped during discovery.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Artifact path. Defaults to `dist/<project lowercase>.h`.
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Macro guarding the implementation region.
    /// Defaults to `<PROJECT>_IMPLEMENTATION`.
    #[serde(default)]
    pub implementation_guard: Option<String>,
    #[serde(default)]
    pub dependency: Option<Dependency>,
}

fn default_include_dir() -> PathBuf {
    PathBuf::from("include")
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_header_extensions() -> Vec<String> {
    vec![".h".to_string(), ".hpp".to_string()]
}

fn default_source_extensions() -> Vec<String> {
    vec![".cpp".to_string(), ".c".to_string()]
}

fn to_macro_case(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

impl Config {
    /// Create a configuration for `project` with every other option defaulted.
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            namespace: None,
            include_dir: default_include_dir(),
            source_dir: default_source_dir(),
            header_extensions: default_header_extensions(),
            source_extensions: default_source_extensions(),
            exclude: Vec::new(),
            output: None,
            implementation_guard: None,
            dependency: None,
        }
    }

    /// The namespace that is stripped from inputs and wrapped around output.
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(&self.project)
    }

    /// Include guard macro, e.g. `MITTELVEC_H`.
    pub fn header_guard(&self) -> String {
        format!("{}_H", to_macro_case(&self.project))
    }

    /// Implementation guard macro, e.g. `MITTELVEC_IMPLEMENTATION`.
    pub fn implementation_guard(&self) -> String {
        self.implementation_guard
            .clone()
            .unwrap_or_else(|| format!("{}_IMPLEMENTATION", to_macro_case(&self.project)))
    }

    /// Output artifact path.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from("dist").join(format!("{}.h", self.project.to_lowercase()))
        })
    }

    /// Compile the exclusion list into patterns matched against basenames.
    ///
    /// Every entry matches its own literal name. An entry that is also valid
    /// glob syntax additionally matches as a glob, so `*_test.cpp` works and
    /// `weird[1].h` still excludes a file named exactly `weird[1].h`.
    pub fn exclude_patterns(&self) -> Result<Vec<Pattern>> {
        let mut patterns = Vec::with_capacity(self.exclude.len());
        for entry in &self.exclude {
            let literal = Pattern::new(&Pattern::escape(entry))?;
            match Pattern::new(entry) {
                Ok(glob) if glob != literal => {
                    patterns.push(literal);
                    patterns.push(glob);
                }
                Ok(_) => patterns.push(literal),
                Err(e) => {
                    debug!("exclude entry '{}' is not a glob ({}); matching literally", entry, e);
                    patterns.push(literal);
                }
            }
        }
        Ok(patterns)
    }

    /// Check every name that ends up as a C/C++ identifier in the artifact.
    pub fn validate(&self) -> Result<()> {
        let identifier = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")?;

        let mut names = vec![("project", self.project.clone())];
        if let Some(ns) = &self.namespace {
            names.push(("namespace", ns.clone()));
        }
        if let Some(guard) = &self.implementation_guard {
            names.push(("implementation_guard", guard.clone()));
        }
        if let Some(dep) = &self.dependency {
            names.push(("dependency.implementation_macro", dep.implementation_macro()));
        }

        for (key, value) in names {
            if !identifier.is_match(&value) {
                return Err(Error::ConfigParse {
                    message: format!("'{}' is not a valid identifier for `{}`", value, key),
                    hint: Some(
                        "Use letters, digits and underscores, not starting with a digit"
                            .to_string(),
                    ),
                });
            }
        }

        if let Some(dep) = &self.dependency {
            if dep.header.trim().is_empty() {
                return Err(Error::ConfigParse {
                    message: "`dependency.header` must not be empty".to_string(),
                    hint: Some("Set it to the header file name, e.g. 'miniaudio.h'".to_string()),
                });
            }
        }

        if self.header_extensions.is_empty() || self.source_extensions.is_empty() {
            return Err(Error::ConfigParse {
                message: "extension lists must not be empty".to_string(),
                hint: Some("Remove the key to use the defaults".to_string()),
            });
        }

        self.exclude_patterns()?;
        Ok(())
    }

    /// Resolve relative directories and the output path against `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        if self.include_dir.is_relative() {
            self.include_dir = base.join(&self.include_dir);
        }
        if self.source_dir.is_relative() {
            self.source_dir = base.join(&self.source_dir);
        }
        let output = self.output_path();
        if output.is_relative() {
            self.output = Some(base.join(output));
        }
        self
    }
}

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub project: Option<String>,
    pub include_dir: Option<PathBuf>,
    pub source_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub exclude: Vec<String>,
    pub implementation_guard: Option<String>,
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        self.project.is_none()
            && self.include_dir.is_none()
            && self.source_dir.is_none()
            && self.output.is_none()
            && self.exclude.is_empty()
            && self.implementation_guard.is_none()
    }

    /// Apply the overrides on top of `config`. Exclusions are appended.
    pub fn apply(&self, mut config: Config) -> Result<Config> {
        if let Some(project) = &self.project {
            config.project = project.clone();
        }
        if let Some(dir) = &self.include_dir {
            config.include_dir = dir.clone();
        }
        if let Some(dir) = &self.source_dir {
            config.source_dir = dir.clone();
        }
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        if let Some(guard) = &self.implementation_guard {
            config.implementation_guard = Some(guard.clone());
        }
        config.exclude.extend(self.exclude.iter().cloned());
        config.validate()?;
        Ok(config)
    }
}

/// Parse and validate a YAML configuration string.
pub fn parse(yaml_content: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(yaml_content).map_err(|e| {
        let message = e.to_string();
        if message.contains("unknown field") {
            Error::ConfigParse {
                message,
                hint: Some(format!("Recognized keys: {}", KNOWN_KEYS.join(", "))),
            }
        } else if message.contains("missing field `project`") {
            Error::ConfigParse {
                message,
                hint: Some("Add 'project: <Name>' to the configuration".to_string()),
            }
        } else {
            Error::Yaml(e)
        }
    })?;
    config.validate()?;
    Ok(config)
}

/// Read a configuration file and resolve its relative paths against the
/// file's own directory.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::Filesystem {
        message: format!("Failed to read configuration '{}': {}", path.display(), e),
    })?;
    let config = parse(&content)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.resolve_paths(base))
}
