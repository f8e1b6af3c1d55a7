//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the herald binary.

mod commands;
mod serve;

pub use commands::{Cli, Commands};
pub use serve::handle_serve_command;
