//! Graph analysis: reachability and placement validation.

pub mod findings;
pub mod placement;
pub mod usage;

pub use findings::ValidationFinding;
pub use placement::PlacementValidator;
pub use usage::{reachable, unused_findings, UsageSet};
