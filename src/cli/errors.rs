//! CLI errors
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by `serve` and `init-config`
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file unreadable, malformed or out of range
    #[error("invalid configuration: {0}")]
    Config(String),

    /// `init-config` target already present
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// Gateway could not start or stopped with an error
    #[error("gateway failed: {0}")]
    Serve(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
