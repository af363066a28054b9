//! Phase 2: Ordering Interface Files
//!
//! This is the second phase of the `single-header` pipeline. Headers are
//! concatenated into one translation unit, so a header has to appear after
//! every header it includes.
//!
//! ## Process
//!
//! 1.  **Graph Construction**: Every interface file becomes a node keyed by
//!     its basename. Its edges are the local includes found by the
//!     [`DependencyScanner`] that name another node. Includes of anything
//!     else (system headers that happen to use quotes, excluded files, typos)
//!     are dropped here.
//!
//! 2.  **Depth-First Post-Order**: Roots are visited in ascending basename
//!     order and each node's dependencies in the order they are included. A
//!     node is appended once all of its dependencies are appended, so
//!     dependencies come before dependents.
//!
//! 3.  **Cycle Breaking**: Each node is marked in-progress while its
//!     dependencies are being visited. Reaching an in-progress node again
//!     means a cycle: the back edge is ignored with a warning and the walk
//!     continues. Cyclic files still appear exactly once.
//!
//! The walk uses an explicit stack, so long include chains cannot overflow
//! the call stack.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

use log::{debug, warn};

use super::{OrderedFile, OrderedFiles};
use crate::scan::DependencyScanner;
use crate::source::SourceFile;

/// Executes Phase 2 of the pipeline.
pub fn execute(files: Vec<SourceFile>, scanner: &DependencyScanner) -> OrderedFiles {
    DependencyGraph::build(files, scanner).into_ordered()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Include graph over interface files, keyed by basename.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    nodes: BTreeMap<String, SourceFile>,
    edges: BTreeMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// Build the graph. When two files share a basename the later one (in
    /// discovery order) replaces the earlier one, with a warning.
    pub fn build(files: Vec<SourceFile>, scanner: &DependencyScanner) -> Self {
        let mut nodes = BTreeMap::new();
        for file in files {
            match nodes.entry(file.basename.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(file);
                }
                Entry::Occupied(mut existing) => {
                    warn!(
                        "replacing {} with {}: both have basename {}",
                        existing.get().path.display(),
                        file.path.display(),
                        file.basename
                    );
                    existing.insert(file);
                }
            }
        }

        let mut edges = BTreeMap::new();
        for (name, file) in &nodes {
            let mut deps: Vec<String> = Vec::new();
            for dep in scanner.scan(&file.content) {
                if !nodes.contains_key(&dep) {
                    debug!("{}: ignoring unresolved include \"{}\"", name, dep);
                    continue;
                }
                if !deps.contains(&dep) {
                    deps.push(dep);
                }
            }
            edges.insert(name.clone(), deps);
        }

        Self { nodes, edges }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, basename: &str) -> bool {
        self.nodes.contains_key(basename)
    }

    /// Resolved local dependencies of `basename`, in include order.
    pub fn dependencies(&self, basename: &str) -> &[String] {
        self.edges.get(basename).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Basenames in dependency order.
    pub fn linearize(&self) -> Vec<String> {
        let mut marks: HashMap<&str, Mark> = HashMap::with_capacity(self.nodes.len());
        let mut order = Vec::with_capacity(self.nodes.len());

        for root in self.nodes.keys() {
            if marks.contains_key(root.as_str()) {
                continue;
            }

            marks.insert(root.as_str(), Mark::InProgress);
            let mut stack: Vec<(&str, usize)> = vec![(root.as_str(), 0)];

            while let Some(&(node, next)) = stack.last() {
                match self.dependencies(node).get(next) {
                    Some(dep) => {
                        if let Some(top) = stack.last_mut() {
                            top.1 += 1;
                        }
                        match marks.get(dep.as_str()) {
                            None => {
                                marks.insert(dep.as_str(), Mark::InProgress);
                                stack.push((dep.as_str(), 0));
                            }
                            Some(Mark::InProgress) => {
                                warn!("include cycle: {} -> {}, ignoring back edge", node, dep);
                            }
                            Some(Mark::Done) => {}
                        }
                    }
                    None => {
                        stack.pop();
                        marks.insert(node, Mark::Done);
                        order.push(node.to_string());
                    }
                }
            }
        }

        order
    }

    /// Consume the graph into the ordered file list.
    pub fn into_ordered(mut self) -> OrderedFiles {
        let order = self.linearize();
        let entries = order
            .into_iter()
            .filter_map(|name| {
                let dependencies = self.edges.remove(&name).unwrap_or_default();
                self.nodes.remove(&name).map(|file| OrderedFile { file, dependencies })
            })
            .collect();
        OrderedFiles { entries }
    }
}
