//! Import graph construction and traversal.
//!
//! The graph is built in three steps:
//! - scan candidate files for import declarations
//! - resolve each specifier to a project file
//! - walk the resolved edges from the page entry points

pub mod builder;
pub mod imports;
pub mod node;
pub mod resolver;
pub mod traversal;

pub use builder::GraphBuilder;
pub use node::{relative_display, ComponentGraph, ComponentNode, GraphStats, ImportEdge};
pub use resolver::ImportResolver;
pub use traversal::{CycleReport, TraversalEngine};
