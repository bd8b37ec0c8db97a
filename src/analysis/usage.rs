//! Reachability analysis.
//!
//! A component is used when some page reaches it through the walked
//! children links. Unused components are reported at the head of their
//! dead subtree only: a node imported by another unused node is
//! suppressed, so one deleted feature folder produces one finding
//! instead of one per file.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::analysis::findings::ValidationFinding;
use crate::config::LintConfig;
use crate::graph::node::{relative_display, ComponentGraph};

/// Paths reachable from at least one entry point.
pub type UsageSet = BTreeSet<PathBuf>;

/// Floods the children relation from every entry point.
pub fn reachable(graph: &ComponentGraph) -> UsageSet {
    let mut used = UsageSet::new();

    for entry in graph.entry_points() {
        let mut stack = vec![entry];
        while let Some(path) = stack.pop() {
            if !used.insert(path.clone()) {
                continue;
            }
            if let Some(node) = graph.get(&path) {
                for child in &node.children {
                    if !used.contains(child) {
                        stack.push(child.clone());
                    }
                }
            }
        }
    }

    used
}

/// Reports unreachable components under the components root, skipping
/// exempt top-level directories and nested members of dead subtrees.
pub fn unused_findings(
    graph: &ComponentGraph,
    used: &UsageSet,
    config: &LintConfig,
    components_root: &Path,
    project_root: &Path,
) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();

    for (path, _node) in graph.nodes.iter() {
        if used.contains(path) {
            continue;
        }

        let Ok(rel) = path.strip_prefix(components_root) else {
            continue;
        };
        if let Some(first) = rel.components().next() {
            let segment = first.as_os_str().to_string_lossy();
            if config.is_exempt_segment(&segment) {
                continue;
            }
        }

        // Unreachable nodes carry no traversal-populated parents, so
        // nesting is judged on the raw edge relation.
        let imported_by_unused = graph.nodes.values().any(|other| {
            other.path != *path
                && !used.contains(&other.path)
                && other.edges.iter().any(|edge| &edge.target == path)
        });
        if imported_by_unused {
            continue;
        }

        findings.push(ValidationFinding::Unused {
            component: relative_display(path, project_root),
        });
    }

    findings
}
