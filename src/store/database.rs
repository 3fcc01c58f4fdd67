//! Database file lifecycle: create, size, drop

use std::fs::{self, OpenOptions};

use super::errors::{StoreError, StoreResult};
use super::SqliteStore;

impl SqliteStore {
    /// Create an empty database file, creating the namespace if needed.
    ///
    /// Fails with `AlreadyExists` if a file is already present; the existing
    /// file is left untouched.
    pub fn create_db(&self, namespace: &str, db_file: &str) -> StoreResult<()> {
        let path = self.db_path(namespace, db_file)?;
        self.new_namespace(namespace)?;

        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| StoreError::from_io(e, &display_name(namespace, db_file)))?;
        Ok(())
    }

    /// Byte length of the database file
    pub fn db_size(&self, namespace: &str, db_file: &str) -> StoreResult<u64> {
        let path = self.db_path(namespace, db_file)?;
        let meta = fs::metadata(&path)
            .map_err(|e| StoreError::from_io(e, &display_name(namespace, db_file)))?;
        Ok(meta.len())
    }

    /// Delete the database file. Unlike namespace deletion this is not idempotent.
    pub fn drop_db(&self, namespace: &str, db_file: &str) -> StoreResult<()> {
        let path = self.db_path(namespace, db_file)?;
        fs::remove_file(&path)
            .map_err(|e| StoreError::from_io(e, &display_name(namespace, db_file)))
    }
}

pub(super) fn display_name(namespace: &str, db_file: &str) -> String {
    format!("{}/{}", namespace, db_file)
}
