//! Component graph construction.
//!
//! Reads candidate files in bounded-concurrency waves, scans each for
//! import declarations, resolves them, and keeps every file with at
//! least one resolved internal import as a graph node. Targets resolved
//! outside the scanned roots (alias namespaces such as `shared/`) are
//! picked up by follow-up waves until the edge set is closed.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::config::LintConfig;
use crate::error::{LintError, Result};
use crate::graph::imports;
use crate::graph::node::{ComponentGraph, ComponentNode, ImportEdge};
use crate::graph::resolver::ImportResolver;

/// Upper bound on concurrently open file reads.
const MAX_PARALLEL_READS: usize = 64;

pub struct GraphBuilder {
    config: LintConfig,
    pages_root: PathBuf,
    resolver: ImportResolver,
}

impl GraphBuilder {
    pub fn new(config: LintConfig, project_root: &Path, pages_root: &Path) -> Self {
        let resolver = ImportResolver::new(config.clone(), project_root);
        Self {
            config,
            pages_root: pages_root.to_path_buf(),
            resolver,
        }
    }

    /// Builds the graph from the discovered candidate files.
    ///
    /// Files without a single resolved internal import do not become
    /// nodes; they can still appear later as traversal leaves when some
    /// node imports them.
    pub async fn build(&self, candidates: Vec<PathBuf>) -> Result<ComponentGraph> {
        let mut graph = ComponentGraph::new();
        let mut seen: BTreeSet<PathBuf> = candidates.iter().cloned().collect();
        let mut wave = candidates;

        while !wave.is_empty() {
            let contents = read_files(wave).await?;
            let mut next_wave = Vec::new();

            for (path, source) in contents {
                let edges = self.scan_edges(&path, &source);

                for edge in &edges {
                    if seen.insert(edge.target.clone()) {
                        next_wave.push(edge.target.clone());
                    }
                }

                if edges.is_empty() {
                    debug!("no internal imports in {}", path.display());
                    continue;
                }

                let is_entry_point = path.starts_with(&self.pages_root);
                graph.insert(
                    ComponentNode::new(path)
                        .with_edges(edges)
                        .with_entry_point(is_entry_point),
                );
            }

            wave = next_wave;
        }

        info!(
            "component graph built: {} nodes, {} edges",
            graph.len(),
            graph.stats().edges
        );
        Ok(graph)
    }

    /// Scans one file's source for resolvable imports, deduplicated by
    /// resolved target in declaration order.
    fn scan_edges(&self, path: &Path, source: &str) -> Vec<ImportEdge> {
        let mut edges: Vec<ImportEdge> = Vec::new();

        for specifier in imports::extract_specifiers(source) {
            let Some(target) = self.resolver.resolve(path, &specifier) else {
                let looks_internal = specifier.starts_with('.')
                    || specifier.starts_with(&self.config.alias_prefix);
                if looks_internal && !self.config.is_stylesheet_specifier(&specifier) {
                    debug!("unresolved import {specifier} in {}", path.display());
                }
                continue;
            };
            if edges.iter().any(|edge| edge.target == target) {
                continue;
            }
            edges.push(ImportEdge::new(specifier, target));
        }

        edges
    }

    #[cfg(test)]
    fn resolver(&self) -> &ImportResolver {
        &self.resolver
    }
}

/// Reads a batch of files with bounded concurrency. Read failures are
/// fatal; the caller only ever passes paths that were seen on disk.
async fn read_files(paths: Vec<PathBuf>) -> Result<Vec<(PathBuf, String)>> {
    let semaphore = Arc::new(Semaphore::new(MAX_PARALLEL_READS));
    let mut join_set = JoinSet::new();

    for path in paths {
        let permit = Arc::clone(&semaphore);
        join_set.spawn(async move {
            let _permit = permit
                .acquire_owned()
                .await
                .map_err(|e| LintError::Task(e.to_string()))?;
            let source = tokio::fs::read_to_string(&path).await?;
            Ok::<(PathBuf, String), LintError>((path, source))
        });
    }

    let mut contents = Vec::new();
    while let Some(joined) = join_set.join_next().await {
        let entry = joined.map_err(|e| LintError::Task(e.to_string()))??;
        contents.push(entry);
    }

    // Completion order is arbitrary; sort so edge discovery is stable
    contents.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(contents)
}
