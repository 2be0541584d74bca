mod aggregator;
mod batch;
mod command;
mod config;
mod dispatcher;
mod error;
mod executor;
mod logger;
mod runner;

use anyhow::{Context, Result};
use clap::Parser;
use command::DEFAULT_GH_BIN_NAME;
use dispatcher::Dispatcher;
use executor::{CommandExecutor, ProcessExecutor};
use std::process::ExitCode;

/// Create pull requests in multiple repositories using one or more configuration files.
#[derive(Parser)]
#[command(name = "gh-bulkpr", version)]
struct Cli {
    /// Simulate PR creation without executing commands
    #[arg(long)]
    dry_run: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,

    /// Batch files (YAML), later files win on repeated names. Glob patterns are expanded.
    #[arg(required = true, value_name = "CONFIG_FILE")]
    config_files: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = logger::init(cli.log_level) {
        eprintln!("Cannot initialise the logger: {:#}", error);
        return ExitCode::FAILURE;
    }

    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{:#}", error);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> Result<()> {
    let sources = config::load(&cli.config_files)
        .await
        .context("Error reading config files")?;
    let batch = batch::merge(sources).context("Error reading config files")?;

    let dispatcher = Dispatcher::new(ProcessExecutor::new(DEFAULT_GH_BIN_NAME), cli.dry_run);
    create_pull_requests(batch, &dispatcher).await
}

async fn create_pull_requests<E: CommandExecutor>(
    batch: batch::Batch,
    dispatcher: &Dispatcher<E>,
) -> Result<()> {
    let mut stdout = std::io::stdout();
    let result = runner::run(batch, dispatcher, &mut stdout)
        .await
        .context("Error creating pull requests")?;

    if let Some(first_failure) = result.first_failure() {
        anyhow::bail!(
            "Error creating pull requests: one or more pull requests failed to process or create (first error: {})",
            first_failure
        );
    }

    log::info!("{} pull request(s) processed", result.attempted());

    Ok(())
}
