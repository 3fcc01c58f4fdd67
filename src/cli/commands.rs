//! CLI command implementations
//!
//! `serve` loads the configuration, prepares the data root and runs the
//! gateway until Ctrl-C or SIGTERM. `init-config` writes a default
//! configuration file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::http_server::{shutdown_signal, GatewayConfig, GatewayServer};
use crate::observability::{log_event_with_fields, Event};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Load the configuration file.
///
/// A missing file yields the default configuration; an unreadable or invalid
/// one is an error.
pub fn load_config(path: &Path) -> CliResult<GatewayConfig> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(GatewayConfig::default()),
        Err(e) => {
            return Err(CliError::Config(format!(
                "failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    let config: GatewayConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::Config(format!("malformed JSON: {}", e)))?;

    config.validate().map_err(CliError::Config)?;

    Ok(config)
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            port,
            data_dir,
        } => serve(&config, port, data_dir),
        Command::InitConfig { config } => init_config(&config),
    }
}

/// Start the gateway and block until a shutdown signal arrives
pub fn serve(config_path: &Path, port: Option<u16>, data_dir: Option<PathBuf>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(data_dir) = data_dir {
        config.data_dir = data_dir;
    }
    config.validate().map_err(CliError::Config)?;

    let server = GatewayServer::new(config)
        .map_err(|e| CliError::Serve(format!("failed to prepare data directory: {}", e)))?;

    let config_display = config_path.display().to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("config", config_display.as_str())]);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Serve(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start(shutdown_signal())
            .await
            .map_err(|e| CliError::Serve(e.to_string()))
    })
}

/// Write a configuration file holding the defaults
pub fn init_config(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::AlreadyExists(config_path.to_path_buf()));
    }

    let json = serde_json::to_string_pretty(&GatewayConfig::default())?;
    fs::write(config_path, json + "\n")?;
    Ok(())
}
