//! Cycle-safe traversal from entry points.
//!
//! The walk is depth-first with an explicit stack. Each frame carries
//! its own copy of the ancestor chain, so a node shared by several
//! branches is revisited once per branch, while a node that appears in
//! its own ancestry is reported as a cycle instead of being descended
//! into. Termination does not depend on a global visited set.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::graph::node::{relative_display, ComponentGraph, ComponentNode};

/// An import chain that loops back onto one of its own ancestors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    /// Ancestor sub-chain starting at the repeated node's first occurrence.
    pub chain: Vec<PathBuf>,
    /// The node whose revisit closed the loop.
    pub closing: PathBuf,
}

impl CycleReport {
    /// Human-readable loop, `a.tsx -> b.tsx -> a.tsx`.
    pub fn describe(&self, root: &Path) -> String {
        let mut parts: Vec<String> = self
            .chain
            .iter()
            .map(|path| relative_display(path, root))
            .collect();
        parts.push(relative_display(&self.closing, root));
        parts.join(" -> ")
    }
}

struct Frame {
    path: PathBuf,
    /// Ancestors of `path` on this branch, entry point first.
    chain: Vec<PathBuf>,
    depth: usize,
}

/// Walks the graph from every entry point, linking children, recording
/// depth observations and collecting cycles, then mirrors the children
/// relation into the parents sets.
pub struct TraversalEngine {
    max_depth: usize,
}

impl TraversalEngine {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Runs both traversal passes and returns the cycles found.
    pub fn traverse(&self, graph: &mut ComponentGraph) -> Vec<CycleReport> {
        let cycles = self.link_children(graph);
        self.assign_parents(graph);
        cycles
    }

    /// First pass: descend along import edges, materializing leaves,
    /// linking children and recording depths.
    pub fn link_children(&self, graph: &mut ComponentGraph) -> Vec<CycleReport> {
        let mut cycles: Vec<CycleReport> = Vec::new();

        for entry in graph.entry_points() {
            let mut stack = vec![Frame {
                path: entry,
                chain: Vec::new(),
                depth: 0,
            }];

            while let Some(frame) = stack.pop() {
                if let Some(first) = frame.chain.iter().position(|p| p == &frame.path) {
                    let report = CycleReport {
                        chain: frame.chain[first..].to_vec(),
                        closing: frame.path,
                    };
                    // The same loop surfaces once per entry point walking it
                    if !cycles.contains(&report) {
                        debug!("import cycle: {} nodes", report.chain.len());
                        cycles.push(report);
                    }
                    continue;
                }

                if !graph.contains(&frame.path) {
                    // Leaves only exist as edge targets. The file was seen
                    // at resolution time; re-check before materializing.
                    if !frame.path.is_file() {
                        continue;
                    }
                    graph.insert(ComponentNode::new(frame.path.clone()));
                }

                let Some(node) = graph.get_mut(&frame.path) else {
                    continue;
                };
                node.record_depth(frame.depth);

                let targets: Vec<PathBuf> =
                    node.edges.iter().map(|edge| edge.target.clone()).collect();
                for target in &targets {
                    node.link_child(target);
                }

                if frame.depth >= self.max_depth {
                    continue;
                }

                let mut chain = frame.chain;
                chain.push(frame.path);
                // Reverse push keeps pop order equal to import order
                for target in targets.into_iter().rev() {
                    stack.push(Frame {
                        path: target,
                        chain: chain.clone(),
                        depth: frame.depth + 1,
                    });
                }
            }
        }

        cycles
    }

    /// Second pass: mirror every walked child link into the child's
    /// parents set, under the same chain discipline.
    pub fn assign_parents(&self, graph: &mut ComponentGraph) {
        for entry in graph.entry_points() {
            let mut stack = vec![Frame {
                path: entry,
                chain: Vec::new(),
                depth: 0,
            }];

            while let Some(frame) = stack.pop() {
                if frame.chain.contains(&frame.path) {
                    continue;
                }

                let children = match graph.get(&frame.path) {
                    Some(node) => node.children.clone(),
                    None => continue,
                };

                for child in &children {
                    if let Some(node) = graph.get_mut(child) {
                        node.parents.insert(frame.path.clone());
                    }
                }

                if frame.depth >= self.max_depth {
                    continue;
                }

                let mut chain = frame.chain;
                chain.push(frame.path);
                for child in children.into_iter().rev() {
                    stack.push(Frame {
                        path: child,
                        chain: chain.clone(),
                        depth: frame.depth + 1,
                    });
                }
            }
        }
    }
}
