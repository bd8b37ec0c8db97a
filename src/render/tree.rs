//! ASCII dependency tree, one root per page.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::graph::node::{relative_display, ComponentGraph};

/// Renders every entry point's dependency tree. Nodes already on the
/// current branch are marked `(circular)` instead of being expanded.
pub fn render_tree(graph: &ComponentGraph, root: &Path, max_depth: usize) -> String {
    let mut out = String::new();

    for entry in graph.entry_points() {
        let _ = writeln!(out, "{}", relative_display(&entry, root));
        let chain = vec![entry.clone()];
        render_children(graph, &entry, root, "", &chain, max_depth, &mut out);
    }

    out
}

fn render_children(
    graph: &ComponentGraph,
    path: &Path,
    root: &Path,
    prefix: &str,
    chain: &[PathBuf],
    max_depth: usize,
    out: &mut String,
) {
    let Some(node) = graph.get(path) else {
        return;
    };

    let count = node.children.len();
    for (index, child) in node.children.iter().enumerate() {
        let last = index + 1 == count;
        let connector = if last { "└── " } else { "├── " };
        let label = relative_display(child, root);

        if chain.iter().any(|p| p == child) {
            let _ = writeln!(out, "{prefix}{connector}{label} (circular)");
            continue;
        }

        let _ = writeln!(out, "{prefix}{connector}{label}");

        if chain.len() >= max_depth {
            continue;
        }

        let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
        let mut child_chain = chain.to_vec();
        child_chain.push(child.clone());
        render_children(graph, child, root, &child_prefix, &child_chain, max_depth, out);
    }
}
