use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use crate::analysis::{reachable, unused_findings, PlacementValidator, ValidationFinding};
use crate::config::{LintConfig, ProjectLayout};
use crate::discovery::FileWalker;
use crate::error::Result;
use crate::graph::{ComponentGraph, CycleReport, GraphBuilder, TraversalEngine};
use crate::render;

#[derive(Parser)]
#[command(name = "layer-lint")]
#[command(about = "Validates component layering and import structure in page-based front-end projects")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Check the project in the current directory
    layer-lint check

    # Check another project, machine-readable output
    layer-lint check ./apps/storefront --format json

    # Print each page's dependency tree
    layer-lint tree

    # Show graph statistics
    layer-lint stats
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a configuration file (default: <root>/layerlint.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the import graph and report layering findings
    Check {
        /// Project root containing the pages and components directories
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print the dependency tree for every page
    Tree {
        /// Project root containing the pages and components directories
        #[arg(default_value = ".")]
        root: PathBuf,
    },

    /// Show component graph statistics
    Stats {
        /// Project root containing the pages and components directories
        #[arg(default_value = ".")]
        root: PathBuf,
    },
}

/// A fully built and traversed project graph.
pub struct ProjectGraph {
    pub config: LintConfig,
    pub layout: ProjectLayout,
    pub graph: ComponentGraph,
    pub cycles: Vec<CycleReport>,
    pub candidate_count: usize,
}

/// Discovers files, builds the graph and runs both traversal passes.
pub async fn load_project(root: &Path, config_path: Option<&Path>) -> Result<ProjectGraph> {
    let config = LintConfig::load(root, config_path)?;
    let layout = ProjectLayout::locate(root, &config)?;

    let walker = FileWalker::new(config.clone());
    let mut candidates = walker.walk(&layout.pages_root)?;
    candidates.extend(walker.walk(&layout.components_root)?);
    let candidate_count = candidates.len();
    info!("discovered {} candidate files", candidate_count);

    let builder = GraphBuilder::new(config.clone(), &layout.root, &layout.pages_root);
    let mut graph = builder.build(candidates).await?;

    let engine = TraversalEngine::new(config.max_traversal_depth);
    let cycles = engine.traverse(&mut graph);

    Ok(ProjectGraph {
        config,
        layout,
        graph,
        cycles,
        candidate_count,
    })
}

/// Runs every analysis over a built project, in report order.
pub fn collect_findings(project: &ProjectGraph) -> Vec<ValidationFinding> {
    let mut findings: Vec<ValidationFinding> = project
        .cycles
        .iter()
        .map(|cycle| ValidationFinding::from_cycle(cycle, &project.layout.root))
        .collect();

    let used = reachable(&project.graph);
    findings.extend(unused_findings(
        &project.graph,
        &used,
        &project.config,
        &project.layout.components_root,
        &project.layout.root,
    ));

    let validator = PlacementValidator::new(
        &project.config,
        &project.layout.root,
        &project.layout.components_root,
    );
    findings.extend(validator.validate(&project.graph));

    findings
}

/// Returns whether the findings require changes, for the exit status.
pub async fn run_check(root: &Path, config_path: Option<&Path>, format: &str) -> Result<bool> {
    let project = load_project(root, config_path).await?;
    let findings = collect_findings(&project);
    let changes_needed = findings.iter().any(|f| f.is_actionable());

    if format == "json" {
        println!("{}", render::to_json(&findings, changes_needed)?);
    } else {
        render::print_report(&findings, changes_needed);
    }

    Ok(changes_needed)
}

pub async fn run_tree(root: &Path, config_path: Option<&Path>) -> Result<()> {
    let project = load_project(root, config_path).await?;

    if project.graph.entry_points().is_empty() {
        println!("No pages with internal imports found");
        return Ok(());
    }

    print!(
        "{}",
        render::render_tree(
            &project.graph,
            &project.layout.root,
            project.config.max_traversal_depth,
        )
    );
    Ok(())
}

pub async fn run_stats(root: &Path, config_path: Option<&Path>) -> Result<()> {
    let project = load_project(root, config_path).await?;
    let stats = project.graph.stats();

    println!("Component Graph Statistics:");
    println!("  Candidate files: {}", project.candidate_count);
    println!("  Graph nodes: {}", stats.nodes);
    println!("  Import edges: {}", stats.edges);
    println!("  Entry points: {}", stats.entry_points);
    println!("  Leaf components: {}", stats.leaves);
    println!("  Max depth: {}", stats.max_depth);
    println!("  Cycles: {}", project.cycles.len());

    Ok(())
}
