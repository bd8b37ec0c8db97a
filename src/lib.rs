pub mod analysis;
pub mod config;
pub mod discovery;
pub mod error;
pub mod graph;
pub mod render;

pub use analysis::{reachable, unused_findings, PlacementValidator, UsageSet, ValidationFinding};
pub use config::{LintConfig, ProjectLayout, CONFIG_FILENAME};
pub use discovery::FileWalker;
pub use error::{LintError, Result};
pub use graph::{
    ComponentGraph, ComponentNode, CycleReport, GraphBuilder, GraphStats, ImportEdge,
    ImportResolver, TraversalEngine,
};
pub use render::{print_report, render_tree, to_json};
