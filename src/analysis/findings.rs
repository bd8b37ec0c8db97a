use std::path::Path;

use serde::Serialize;

use crate::graph::node::relative_display;
use crate::graph::traversal::CycleReport;

/// One problem (or observation) surfaced by a lint run.
///
/// Paths are stored relative to the project root, ready for display
/// and for the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ValidationFinding {
    /// An import chain loops back onto one of its own ancestors.
    Cycle { chain: Vec<String> },
    /// A component no page can reach.
    Unused { component: String },
    /// Every importer lives under one subdirectory; the component
    /// should move under it.
    ShouldMoveDeeper {
        component: String,
        suggested_dir: String,
    },
    /// An importer sits deeper in the tree than the component it uses.
    ParentDeeperThanDependency { component: String, parent: String },
    /// Importer and component live under diverging subdirectories.
    ParentInDifferentSubdirectory { component: String, parent: String },
    /// A page imports a component nested below the top two levels.
    PageUsesNonTopLevelComponent { page: String, component: String },
}

impl ValidationFinding {
    pub fn from_cycle(report: &CycleReport, root: &Path) -> Self {
        let mut chain: Vec<String> = report
            .chain
            .iter()
            .map(|path| relative_display(path, root))
            .collect();
        chain.push(relative_display(&report.closing, root));
        ValidationFinding::Cycle { chain }
    }

    /// Whether this finding asks for a change. Cycles are reported for
    /// visibility but do not flip the exit status on their own.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, ValidationFinding::Cycle { .. })
    }

    pub fn describe(&self) -> String {
        match self {
            ValidationFinding::Cycle { chain } => {
                format!("circular import: {}", chain.join(" -> "))
            }
            ValidationFinding::Unused { component } => {
                format!("{component} is not reachable from any page")
            }
            ValidationFinding::ShouldMoveDeeper {
                component,
                suggested_dir,
            } => {
                format!("{component} is only imported under {suggested_dir}/, move it there")
            }
            ValidationFinding::ParentDeeperThanDependency { component, parent } => {
                format!("{parent} is nested deeper than its dependency {component}")
            }
            ValidationFinding::ParentInDifferentSubdirectory { component, parent } => {
                format!("{parent} imports {component} from a different subdirectory")
            }
            ValidationFinding::PageUsesNonTopLevelComponent { page, component } => {
                format!("{page} imports {component}, which is not a top-level component")
            }
        }
    }
}
