use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use workout_api::commands::Cli;
use workout_api::config::AppConfig;

fn main() -> Result<ExitCode> {
    let config = AppConfig::from_env()?;

    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level))
        )
        .with_writer(std::io::stderr)
        .with_target(config.is_development())
        .with_ansi(!config.is_production())
        .init();

    debug!(environment = %config.environment, "starting workout-api");

    let outcome = cli.execute()?;
    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
