//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the herald binary.
#[derive(Parser, Debug)]
#[command(name = "herald")]
#[command(about = "Due-post notifications and OAuth1.0a publishing for scheduled social posts")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the publish API server and notification poller
    Serve {
        /// Path to the server configuration file
        #[arg(short, long, default_value = "herald.toml")]
        config: PathBuf,

        /// Validate configuration and credentials, then exit
        #[arg(long)]
        dry_run: bool,
    },
}
