use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

/// A resolved import declaration inside one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportEdge {
    /// Specifier as written in the source (`./button`, `@/components/nav`).
    pub specifier: String,
    /// Absolute path the specifier resolved to.
    pub target: PathBuf,
}

impl ImportEdge {
    pub fn new(specifier: impl Into<String>, target: impl Into<PathBuf>) -> Self {
        Self {
            specifier: specifier.into(),
            target: target.into(),
        }
    }
}

/// A source file participating in the import graph.
///
/// `edges` comes from scanning the file itself; `children`, `parents` and
/// the depth fields are filled in by traversal from the entry points.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentNode {
    pub path: PathBuf,
    /// Resolved imports, deduplicated by target in declaration order.
    pub edges: Vec<ImportEdge>,
    /// Direct dependencies discovered during traversal, in import order.
    pub children: Vec<PathBuf>,
    /// Files that import this node, over all walked chains.
    pub parents: BTreeSet<PathBuf>,
    /// Every depth at which traversal reached this node.
    pub depths: BTreeSet<usize>,
    /// Shallowest recorded depth, if the node was reached at all.
    pub min_depth: Option<usize>,
    /// Whether the file lives under the pages directory.
    pub is_entry_point: bool,
}

impl ComponentNode {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            edges: Vec::new(),
            children: Vec::new(),
            parents: BTreeSet::new(),
            depths: BTreeSet::new(),
            min_depth: None,
            is_entry_point: false,
        }
    }

    pub fn with_edges(mut self, edges: Vec<ImportEdge>) -> Self {
        self.edges = edges;
        self
    }

    pub fn with_entry_point(mut self, is_entry_point: bool) -> Self {
        self.is_entry_point = is_entry_point;
        self
    }

    /// Records one depth observation for this node.
    pub fn record_depth(&mut self, depth: usize) {
        self.depths.insert(depth);
        self.min_depth = self.depths.first().copied();
    }

    /// Links a direct dependency, keeping `children` free of duplicates.
    pub fn link_child(&mut self, child: &Path) {
        if !self.children.iter().any(|c| c == child) {
            self.children.push(child.to_path_buf());
        }
    }

    /// A leaf imports nothing itself.
    pub fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Path-keyed arena of nodes. Iteration order is the path order, which
/// keeps every downstream report deterministic.
#[derive(Debug, Default, Serialize)]
pub struct ComponentGraph {
    pub nodes: BTreeMap<PathBuf, ComponentNode>,
}

impl ComponentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: ComponentNode) {
        self.nodes.insert(node.path.clone(), node);
    }

    pub fn get(&self, path: &Path) -> Option<&ComponentNode> {
        self.nodes.get(path)
    }

    pub fn get_mut(&mut self, path: &Path) -> Option<&mut ComponentNode> {
        self.nodes.get_mut(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.nodes.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Paths of all entry-point nodes, in path order.
    pub fn entry_points(&self) -> Vec<PathBuf> {
        self.nodes
            .values()
            .filter(|node| node.is_entry_point)
            .map(|node| node.path.clone())
            .collect()
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.nodes.len(),
            edges: self.nodes.values().map(|n| n.edges.len()).sum(),
            entry_points: self.nodes.values().filter(|n| n.is_entry_point).count(),
            leaves: self.nodes.values().filter(|n| n.is_leaf()).count(),
            max_depth: self
                .nodes
                .values()
                .filter_map(|n| n.depths.last().copied())
                .max()
                .unwrap_or(0),
        }
    }
}

/// Aggregate counts over a built graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub entry_points: usize,
    pub leaves: usize,
    pub max_depth: usize,
}

/// Formats a path relative to the project root for display.
pub fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
