//! # Namespace and Database Store
//!
//! Filesystem-backed model of namespaces (directories) holding SQLite
//! database files, plus the command bridge that runs caller SQL against them.
//!
//! Layout on disk:
//!
//! ```text
//! <root>/<namespace>/<name>.db
//! ```
//!
//! Every operation is synchronous. A SQLite connection is opened per call and
//! dropped before the call returns; nothing is cached between calls.

mod command;
mod database;
mod errors;
mod marshal;
mod namespace;
mod path;

use std::path::{Path, PathBuf};

pub use errors::{StoreError, StoreResult};
pub use marshal::{marshal_row, real_to_text, value_to_text, Row};
pub use path::{check_segment, db_file_name, is_valid_segment, resolve, DB_SUFFIX};

/// Store rooted at a single data directory
#[derive(Debug, Clone)]
pub struct SqliteStore {
    root: PathBuf,
}

impl SqliteStore {
    /// Create a store over `root`. The directory is not touched.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data root
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn namespace_path(&self, namespace: &str) -> StoreResult<PathBuf> {
        check_segment(namespace)?;
        Ok(self.root.join(namespace))
    }

    fn db_path(&self, namespace: &str, db_file: &str) -> StoreResult<PathBuf> {
        check_segment(namespace)?;
        check_segment(db_file)?;
        Ok(resolve(&self.root, namespace, db_file))
    }
}
