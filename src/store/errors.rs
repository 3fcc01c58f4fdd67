//! # Store Errors

use std::io;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Namespace, database and command errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Namespace or database file is absent
    #[error("no such file or directory: {0}")]
    NotFound(String),

    /// Database creation collided with an existing file
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// Name cannot be used as a single path segment
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// SQLite rejected the statement or the operation
    #[error("{0}")]
    Execution(#[from] rusqlite::Error),

    /// Filesystem failure not otherwise classified
    #[error("{0}")]
    Io(#[from] io::Error),
}

impl StoreError {
    /// Map an I/O error on `what`, turning `NotFound` into the dedicated variant
    pub(crate) fn from_io(err: io::Error, what: &str) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(what.to_string()),
            io::ErrorKind::AlreadyExists => StoreError::AlreadyExists(what.to_string()),
            _ => StoreError::Io(err),
        }
    }

    /// Whether the error reports an absent namespace or database
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    /// Whether the error was caused by the caller-supplied name
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, StoreError::InvalidName(_))
    }
}
