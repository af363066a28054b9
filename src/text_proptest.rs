//! Property-based tests for the text transforms and header ordering.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::directive::{Directive, DirectiveClassifier};
    use crate::namespace::NamespaceStripper;
    use crate::phases::ordering;
    use crate::scan::DependencyScanner;
    use crate::source::{FileKind, SourceFile};
    use proptest::prelude::*;

    /// Lines that never open a `namespace Foo {` block.
    fn body_line() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z ;=0-9]{0,20}",
            Just("struct S {".to_string()),
            Just("};".to_string()),
            Just("  void f() { g(); }".to_string()),
            Just("namespace FooBar {".to_string()),
            Just("namespace detail {".to_string()),
            Just("}".to_string()),
        ]
    }

    /// Balanced body with up to three levels of nested braces.
    fn balanced_body() -> impl Strategy<Value = Vec<String>> {
        let leaf = "[a-z ;=0-9]{0,16}".prop_map(|s| vec![s]);
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop::collection::vec(inner, 0..4).prop_map(|blocks| {
                let mut lines = vec!["struct X {".to_string()];
                lines.extend(blocks.into_iter().flatten());
                lines.push("};".to_string());
                lines
            })
        })
    }

    /// Random DAG over `n` headers: edges only point to higher indices.
    fn dag() -> impl Strategy<Value = Vec<Vec<usize>>> {
        (1usize..12).prop_flat_map(|n| {
            (0..n)
                .map(|i| prop::collection::vec((i + 1)..=n, 0..3))
                .collect::<Vec<_>>()
        })
    }

    fn headers(deps: &[Vec<usize>], names: &[String]) -> Vec<SourceFile> {
        deps.iter()
            .enumerate()
            .map(|(i, targets)| {
                let content: String = targets
                    .iter()
                    .filter(|t| **t < deps.len())
                    .map(|t| format!("#include \"{}\"\n", names[*t]))
                    .collect();
                SourceFile::new(format!("include/{}", names[i]), FileKind::Interface, content)
                    .unwrap()
            })
            .collect()
    }

    proptest! {
        /// Property: content without a matching opening line is returned unchanged
        #[test]
        fn strip_without_namespace_is_identity(lines in prop::collection::vec(body_line(), 0..20)) {
            let content = lines.join("\n");
            let stripper = NamespaceStripper::new("Foo").unwrap();
            prop_assert_eq!(stripper.strip(&content), content.as_str());
        }

        /// Property: stripping a wrapped balanced body yields the body
        #[test]
        fn strip_unwraps_balanced_body(body in balanced_body()) {
            let content = format!("namespace Foo {{\n{}\n}}", body.join("\n"));
            let stripper = NamespaceStripper::new("Foo").unwrap();
            prop_assert_eq!(stripper.strip(&content), body.join("\n"));
        }

        /// Property: an unclosed block is returned unchanged
        #[test]
        fn strip_unclosed_is_identity(body in balanced_body()) {
            let content = format!("namespace Foo {{\n{}", body.join("\n"));
            let stripper = NamespaceStripper::new("Foo").unwrap();
            prop_assert_eq!(stripper.strip(&content), content.as_str());
        }

        /// Property: external classification trims but never rewrites the directive
        #[test]
        fn external_include_is_trimmed_line(header in "[a-z_/]{1,12}", pad in "[ \t]{0,4}") {
            let line = format!("{}#include <{}>{}", pad, header, pad);
            let classifier = DirectiveClassifier::new().unwrap();
            prop_assert_eq!(classifier.classify(&line), Directive::External(line.trim()));
        }

        /// Property: every dependency precedes its dependent in an acyclic graph
        #[test]
        fn order_respects_every_edge(deps in dag()) {
            let names: Vec<String> = (0..deps.len()).map(|i| format!("h{}.h", i)).collect();
            let scanner = DependencyScanner::new().unwrap();
            let ordered = ordering::execute(headers(&deps, &names), &scanner);

            prop_assert_eq!(ordered.len(), deps.len());
            for (from, targets) in deps.iter().enumerate() {
                for to in targets.iter().filter(|t| **t < deps.len()) {
                    let a = ordered.position(&names[from]).unwrap();
                    let b = ordered.position(&names[*to]).unwrap();
                    prop_assert!(b < a, "{} must come before {}", names[*to], names[from]);
                }
            }
        }

        /// Property: ordering does not depend on input order
        #[test]
        fn order_is_deterministic(deps in dag()) {
            let names: Vec<String> = (0..deps.len()).map(|i| format!("h{}.h", i)).collect();
            let scanner = DependencyScanner::new().unwrap();
            let files = headers(&deps, &names);
            let mut reversed = files.clone();
            reversed.reverse();

            let first = ordering::execute(files, &scanner);
            let second = ordering::execute(reversed, &scanner);
            prop_assert_eq!(first.basenames(), second.basenames());
        }
    }
}
