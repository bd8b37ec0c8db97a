mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

// Re-export from lib for internal use
use layer_lint::{analysis, config, discovery, error, graph, render};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "layer_lint=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { root, format } => {
            let changes_needed = cli::run_check(&root, cli.config.as_deref(), &format).await?;
            if changes_needed {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Tree { root } => {
            cli::run_tree(&root, cli.config.as_deref()).await?;
        }
        Commands::Stats { root } => {
            cli::run_stats(&root, cli.config.as_deref()).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
