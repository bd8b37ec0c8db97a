//! Placement validation.
//!
//! Components are judged by where their importers live, using path
//! segments relative to the components root. A trailing directory
//! index file collapses onto its directory, so `wizard/index.tsx`
//! counts as the depth-1 component `wizard`.
//!
//! Shallow components (depth 1-2) are pushed deeper when every
//! importer agrees on a subdirectory. Deep components (depth 3+) must
//! not be imported from deeper or diverging locations. Pages may only
//! import top-level components.

use std::path::Path;

use crate::analysis::findings::ValidationFinding;
use crate::config::LintConfig;
use crate::graph::node::{relative_display, ComponentGraph, ComponentNode};

pub struct PlacementValidator<'a> {
    config: &'a LintConfig,
    project_root: &'a Path,
    components_root: &'a Path,
}

impl<'a> PlacementValidator<'a> {
    pub fn new(config: &'a LintConfig, project_root: &'a Path, components_root: &'a Path) -> Self {
        Self {
            config,
            project_root,
            components_root,
        }
    }

    pub fn validate(&self, graph: &ComponentGraph) -> Vec<ValidationFinding> {
        let mut findings = Vec::new();

        for node in graph.nodes.values() {
            let Some(segments) = self.component_segments(&node.path) else {
                continue;
            };
            if segments.len() <= 2 {
                if let Some(finding) = self.check_shallow(node, &segments) {
                    findings.push(finding);
                }
            } else {
                self.check_deep(node, &segments, &mut findings);
            }
        }

        for entry in graph.entry_points() {
            let Some(node) = graph.get(&entry) else {
                continue;
            };
            self.check_page_imports(node, &mut findings);
        }

        findings
    }

    /// Rule for depth 1-2 components: when every importer lives under
    /// one common subdirectory and the component does not, it belongs
    /// under that subdirectory.
    fn check_shallow(&self, node: &ComponentNode, segments: &[String]) -> Option<ValidationFinding> {
        if node.parents.is_empty() {
            return None;
        }
        if self.config.is_exempt_segment(&segments[0]) {
            return None;
        }

        let mut parent_dirs = Vec::new();
        for parent in &node.parents {
            // Any importer outside the components root anchors the
            // component where it is
            let parent_segments = self.component_segments(parent)?;
            parent_dirs.push(directory_of(&parent_segments));
        }

        let prefix = common_prefix(&parent_dirs);
        if prefix.is_empty() {
            return None;
        }

        let dir = directory_of(segments);
        if dir.len() >= prefix.len() && dir[..prefix.len()] == prefix[..] {
            return None;
        }

        Some(ValidationFinding::ShouldMoveDeeper {
            component: relative_display(&node.path, self.project_root),
            suggested_dir: prefix.join("/"),
        })
    }

    /// Rule for depth 3+ components: importers must not sit deeper than
    /// the component, and must share its directory as a prefix of
    /// their own.
    fn check_deep(
        &self,
        node: &ComponentNode,
        segments: &[String],
        findings: &mut Vec<ValidationFinding>,
    ) {
        let dir = directory_of(segments);

        for parent in &node.parents {
            let Some(parent_segments) = self.component_segments(parent) else {
                continue;
            };

            if parent_segments.len() > segments.len() {
                findings.push(ValidationFinding::ParentDeeperThanDependency {
                    component: relative_display(&node.path, self.project_root),
                    parent: relative_display(parent, self.project_root),
                });
                continue;
            }

            let parent_dir = directory_of(&parent_segments);
            if parent_dir[..] != dir[..parent_dir.len()] {
                findings.push(ValidationFinding::ParentInDifferentSubdirectory {
                    component: relative_display(&node.path, self.project_root),
                    parent: relative_display(parent, self.project_root),
                });
            }
        }
    }

    /// Pages may only import depth 1-2 components directly.
    fn check_page_imports(&self, page: &ComponentNode, findings: &mut Vec<ValidationFinding>) {
        for child in &page.children {
            let Some(segments) = self.component_segments(child) else {
                continue;
            };
            if segments.len() > 2 {
                findings.push(ValidationFinding::PageUsesNonTopLevelComponent {
                    page: relative_display(&page.path, self.project_root),
                    component: relative_display(child, self.project_root),
                });
            }
        }
    }

    /// Path segments below the components root, with a trailing index
    /// file collapsed onto its directory. `None` outside the root.
    fn component_segments(&self, path: &Path) -> Option<Vec<String>> {
        let rel = path.strip_prefix(self.components_root).ok()?;
        let mut segments: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        if let Some(last) = segments.last() {
            let stem = Path::new(last.as_str()).file_stem()?.to_string_lossy();
            if stem == self.config.index_basename {
                segments.pop();
            }
        }

        (!segments.is_empty()).then_some(segments)
    }
}

fn directory_of(segments: &[String]) -> Vec<String> {
    segments[..segments.len() - 1].to_vec()
}

/// Longest shared leading run across all directories.
fn common_prefix(dirs: &[Vec<String>]) -> Vec<String> {
    let Some(first) = dirs.first() else {
        return Vec::new();
    };
    let mut prefix = first.clone();

    for dir in &dirs[1..] {
        let shared = prefix
            .iter()
            .zip(dir.iter())
            .take_while(|(a, b)| a == b)
            .count();
        prefix.truncate(shared);
        if prefix.is_empty() {
            break;
        }
    }

    prefix
}
