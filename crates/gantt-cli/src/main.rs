use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gantt_cli::commands::{chart, tasks};
use gantt_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    match &cli.command {
        Commands::Chart {
            file,
            tasks,
            start,
            end,
            width,
            json,
        } => {
            chart::run(file, tasks, start, end, *width, *json, &config)?;
        }
        Commands::Tasks { file } => {
            tasks::run(file)?;
        }
    }

    Ok(())
}
