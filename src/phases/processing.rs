//! Phase 3: Processing Individual Files
//!
//! This is the third phase of the `single-header` pipeline. Every interface
//! file (in dependency order) and every implementation file (in discovery
//! order) is turned into a body that can be pasted into the artifact.
//!
//! ## Process
//!
//! 1.  **Namespace Stripping**: The file's own `namespace <Name> { ... }`
//!     wrapper is removed. The artifact re-wraps all bodies in one block.
//!
//! 2.  **Directive Classification**: Each remaining line is classified.
//!     External includes are moved into the shared [`ExternalIncludes`] set,
//!     local includes are dropped, `#pragma once` is dropped from interface
//!     files, and everything else is kept verbatim.
//!
//! Implementation files are never reordered: nothing includes a translation
//! unit, so discovery order is as good as any.

use log::debug;

use super::{OrderedFiles, ProcessedSources, TransformedBody};
use crate::directive::{Directive, DirectiveClassifier, ExternalIncludes};
use crate::error::Result;
use crate::namespace::NamespaceStripper;
use crate::source::{FileKind, SourceFile};

/// Executes Phase 3 of the pipeline.
pub fn execute(
    ordered: &OrderedFiles,
    implementation: &[SourceFile],
    namespace: &str,
) -> Result<ProcessedSources> {
    let transformer = Transformer::new(namespace)?;
    let mut external_includes = ExternalIncludes::new();

    let interface = ordered
        .files()
        .map(|file| transformer.transform(file, &mut external_includes))
        .collect();
    let implementation = implementation
        .iter()
        .map(|file| transformer.transform(file, &mut external_includes))
        .collect();

    Ok(ProcessedSources {
        interface,
        implementation,
        external_includes,
    })
}

/// Namespace stripper and directive classifier applied together.
#[derive(Debug, Clone)]
pub struct Transformer {
    stripper: NamespaceStripper,
    classifier: DirectiveClassifier,
}

impl Transformer {
    pub fn new(namespace: &str) -> Result<Self> {
        Ok(Self {
            stripper: NamespaceStripper::new(namespace)?,
            classifier: DirectiveClassifier::new()?,
        })
    }

    /// Transform one file, adding its external includes to `external`.
    pub fn transform(&self, file: &SourceFile, external: &mut ExternalIncludes) -> TransformedBody {
        let stripped = self.stripper.strip(&file.content);

        let mut kept: Vec<&str> = Vec::new();
        let mut dropped = 0usize;
        for line in stripped.lines() {
            match self.classifier.classify(line) {
                Directive::External(directive) => {
                    external.insert(directive);
                    dropped += 1;
                }
                Directive::Local(_) => dropped += 1,
                Directive::PragmaOnce if file.kind == FileKind::Interface => dropped += 1,
                Directive::PragmaOnce | Directive::Ordinary(_) => kept.push(line),
            }
        }

        debug!(
            "{}: kept {} lines, removed {} directives",
            file.basename,
            kept.len(),
            dropped
        );

        TransformedBody {
            basename: file.basename.clone(),
            text: kept.join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phases::OrderedFile;

    fn interface(name: &str, content: &str) -> SourceFile {
        SourceFile::new(format!("include/{}", name), FileKind::Interface, content).unwrap()
    }

    fn implementation(name: &str, content: &str) -> SourceFile {
        SourceFile::new(format!("src/{}", name), FileKind::Implementation, content).unwrap()
    }

    fn ordered(files: Vec<SourceFile>) -> OrderedFiles {
        OrderedFiles {
            entries: files
                .into_iter()
                .map(|file| OrderedFile {
                    file,
                    dependencies: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_transform_header() {
        let transformer = Transformer::new("Foo").unwrap();
        let mut external = ExternalIncludes::new();
        let file = interface(
            "Gain.h",
            "#pragma once\n#include \"AudioNode.h\"\n#include <vector>\n\nnamespace Foo {\n\nclass Gain {};\n\n} // namespace\n",
        );

        let body = transformer.transform(&file, &mut external);
        assert_eq!(body.basename, "Gain.h");
        assert_eq!(body.text, "\n\nclass Gain {};");
        assert!(external.contains("#include <vector>"));
        assert_eq!(external.len(), 1);
    }

    #[test]
    fn test_transform_source_keeps_pragma_once() {
        let transformer = Transformer::new("Foo").unwrap();
        let mut external = ExternalIncludes::new();
        let file = implementation("odd.cpp", "#pragma once\nint x;");

        let body = transformer.transform(&file, &mut external);
        assert_eq!(body.text, "#pragma once\nint x;");
    }

    #[test]
    fn test_transform_without_namespace() {
        let transformer = Transformer::new("Foo").unwrap();
        let mut external = ExternalIncludes::new();
        let file = implementation(
            "Gain.cpp",
            "#include \"../include/Gain.h\"\n#include <cmath>\n\nGain::Gain() {}\n",
        );

        let body = transformer.transform(&file, &mut external);
        assert_eq!(body.text, "\nGain::Gain() {}");
        assert!(external.contains("#include <cmath>"));
    }

    #[test]
    fn test_includes_inside_namespace_are_hoisted() {
        let transformer = Transformer::new("Foo").unwrap();
        let mut external = ExternalIncludes::new();
        let file = interface("a.h", "namespace Foo {\n  #include <map>\nint x;\n}");

        let body = transformer.transform(&file, &mut external);
        assert_eq!(body.text, "int x;");
        assert!(external.contains("#include <map>"));
    }

    #[test]
    fn test_execute_collects_and_orders() {
        let headers = ordered(vec![
            interface("c.h", "#include <vector>\nnamespace Foo {\nstruct C {};\n}"),
            interface("b.h", "#include \"c.h\"\n#include <string>\nnamespace Foo {\nstruct B {};\n}"),
        ]);
        let sources = vec![
            implementation("b.cpp", "#include \"b.h\"\n#include <vector>\nnamespace Foo {\nB make();\n}"),
        ];

        let processed = execute(&headers, &sources, "Foo").unwrap();
        let interface_bodies: Vec<&str> =
            processed.interface.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(interface_bodies, vec!["struct C {};", "struct B {};"]);
        assert_eq!(processed.implementation.len(), 1);
        assert_eq!(processed.implementation[0].text, "B make();");

        let includes: Vec<&str> = processed.external_includes.iter().collect();
        assert_eq!(includes, vec!["#include <string>", "#include <vector>"]);
    }

    #[test]
    fn test_execute_empty() {
        let processed = execute(&OrderedFiles::default(), &[], "Foo").unwrap();
        assert!(processed.interface.is_empty());
        assert!(processed.implementation.is_empty());
        assert!(processed.external_includes.is_empty());
    }
}
