//! CLI module for remote-sqlite
//!
//! Provides command-line interface for:
//! - serve: Run the gateway
//! - init-config: Write a default configuration file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init_config, load_config, run, run_command, serve};
pub use errors::{CliError, CliResult};
