//! Phase 4: Artifact Assembly
//!
//! This is the fourth phase of the `single-header` pipeline. It renders the
//! processed bodies into the final single-header text:
//!
//! ```text
//! // <Project> - Single-Header Library
//! // Generated on <date>
//! #ifndef <PROJECT>_H
//! #define <PROJECT>_H
//! <sorted external includes>
//! <dependency note and include, if configured>
//! namespace <Ns> { <interface bodies> } // namespace <Ns>
//! #endif // <PROJECT>_H
//! #ifdef <IMPLEMENTATION_GUARD>
//! <dependency implementation macro and include, if configured>
//! namespace <Ns> { <implementation bodies> } // namespace <Ns>
//! #endif // <IMPLEMENTATION_GUARD>
//! ```
//!
//! Rendering is pure: the generation date is an input, so the same sources
//! and date always give byte-identical output.

use std::fmt;

use chrono::NaiveDate;

use super::{ProcessedSources, TransformedBody};
use crate::config::{Config, Dependency};

/// Prefix of the banner line carrying the generation date.
pub const GENERATED_ON_PREFIX: &str = "// Generated on ";

/// Executes Phase 4 of the pipeline.
pub fn execute(processed: &ProcessedSources, config: &Config, date: NaiveDate) -> String {
    Artifact {
        processed,
        config,
        date,
    }
    .to_string()
}

/// `text` without the generation-date line, for staleness comparisons.
pub fn without_generation_date(text: &str) -> String {
    text.lines()
        .filter(|line| !line.starts_with(GENERATED_ON_PREFIX))
        .collect::<Vec<_>>()
        .join("\n")
}

struct Artifact<'a> {
    processed: &'a ProcessedSources,
    config: &'a Config,
    date: NaiveDate,
}

impl Artifact<'_> {
    fn write_namespace(
        &self,
        f: &mut fmt::Formatter<'_>,
        bodies: &[TransformedBody],
    ) -> fmt::Result {
        let namespace = self.config.namespace();
        writeln!(f, "namespace {} {{", namespace)?;
        writeln!(f)?;
        for body in bodies {
            writeln!(f, "{}", body.text)?;
        }
        writeln!(f, "}} // namespace {}", namespace)?;
        writeln!(f)
    }

    fn write_dependency_note(f: &mut fmt::Formatter<'_>, dep: &Dependency) -> fmt::Result {
        let name = dep
            .header
            .rsplit_once('.')
            .map_or(dep.header.as_str(), |(stem, _)| stem);
        writeln!(
            f,
            "// NOTE! This lib depends on {} (a single header file library)",
            name
        )?;
        writeln!(f, "// Ensure {} is in your include path", dep.header)?;
        writeln!(f, "#include \"{}\"", dep.header)?;
        writeln!(f)
    }

    fn write_dependency_implementation(
        f: &mut fmt::Formatter<'_>,
        dep: &Dependency,
    ) -> fmt::Result {
        let macro_name = dep.implementation_macro();
        writeln!(f, "#ifndef {}", macro_name)?;
        writeln!(f, "    #define {}", macro_name)?;
        writeln!(f, "#endif")?;
        writeln!(f, "#include \"{}\"", dep.header)?;
        writeln!(f)
    }
}

impl fmt::Display for Artifact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.config.header_guard();
        let implementation_guard = self.config.implementation_guard();

        writeln!(f, "// {} - Single-Header Library", self.config.project)?;
        writeln!(f, "{}{}", GENERATED_ON_PREFIX, self.date.format("%Y-%m-%d"))?;
        writeln!(f)?;
        writeln!(f, "#ifndef {}", guard)?;
        writeln!(f, "#define {}", guard)?;
        writeln!(f)?;

        // trailing space is part of the format
        writeln!(f, "// System includes ")?;
        for directive in self.processed.external_includes.iter() {
            writeln!(f, "{}", directive)?;
        }
        writeln!(f)?;

        if let Some(dep) = &self.config.dependency {
            Self::write_dependency_note(f, dep)?;
        }

        self.write_namespace(f, &self.processed.interface)?;
        writeln!(f, "#endif // {}", guard)?;
        writeln!(f)?;

        writeln!(f, "#ifdef {}", implementation_guard)?;
        writeln!(f)?;
        if let Some(dep) = &self.config.dependency {
            Self::write_dependency_implementation(f, dep)?;
        }
        self.write_namespace(f, &self.processed.implementation)?;
        writeln!(f, "#endif // {}", implementation_guard)
    }
}
