//! Xerophi Admin: application entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "xerophi-admin")]
#[command(about = "Interactive console for managing Xerophi user records")]
struct Cli {
    /// JSON configuration file (also read from `XEROPHI_CONFIG`).
    #[arg(long, env = "XEROPHI_CONFIG", default_value = "config.json")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("xerophi=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Xerophi admin...");

    match xerophi_admin::app::run(&cli.config).await {
        Ok(()) => {
            tracing::info!("Xerophi admin stopped.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Xerophi admin failed");
            ExitCode::FAILURE
        }
    }
}
