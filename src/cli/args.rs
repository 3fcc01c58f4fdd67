//! CLI argument definitions using clap
//!
//! Commands:
//! - remote-sqlite serve --config <path> [--port <port>] [--data-dir <dir>]
//! - remote-sqlite init-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// remote-sqlite - an authenticated HTTP gateway over SQLite files
#[derive(Parser, Debug)]
#[command(name = "remote-sqlite")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the gateway
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./remote-sqlite.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,

        /// Override the configured data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Write a configuration file with default values
    InitConfig {
        /// Path of the file to create
        #[arg(long, default_value = "./remote-sqlite.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["remote-sqlite", "serve"]).unwrap();
        match cli.command {
            Command::Serve {
                config,
                port,
                data_dir,
            } => {
                assert_eq!(config, PathBuf::from("./remote-sqlite.json"));
                assert!(port.is_none());
                assert!(data_dir.is_none());
            }
            _ => panic!("Expected Serve"),
        }
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from([
            "remote-sqlite",
            "serve",
            "--config",
            "/etc/rs.json",
            "--port",
            "8080",
            "--data-dir",
            "/var/lib/rs",
        ])
        .unwrap();
        match cli.command {
            Command::Serve { port, data_dir, .. } => {
                assert_eq!(port, Some(8080));
                assert_eq!(data_dir, Some(PathBuf::from("/var/lib/rs")));
            }
            _ => panic!("Expected Serve"),
        }
    }
}
