//! Herald server binary.
//!
//! Runs the publish API and, when configured, the due-post
//! notification poller.

use clap::Parser;
use herald::cli::{Cli, Commands, handle_serve_command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { config, dry_run } => handle_serve_command(config, dry_run).await?,
    }

    Ok(())
}
