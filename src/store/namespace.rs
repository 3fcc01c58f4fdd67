//! Namespace lifecycle: create, delete, list contained databases

use std::fs;
use std::io;
use std::path::Path;

use super::errors::{StoreError, StoreResult};
use super::path::DB_SUFFIX;
use super::SqliteStore;

impl SqliteStore {
    /// Create the namespace directory. Creating an existing namespace succeeds.
    pub fn new_namespace(&self, namespace: &str) -> StoreResult<()> {
        let dir = self.namespace_path(namespace)?;
        fs::create_dir_all(&dir)?;
        Ok(())
    }

    /// Remove the namespace and every database in it.
    ///
    /// A namespace that does not exist is treated as already deleted.
    pub fn delete_namespace(&self, namespace: &str) -> StoreResult<()> {
        let dir = self.namespace_path(namespace)?;
        match fs::remove_dir_all(&dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// List database names (suffix stripped) found anywhere under the namespace.
    ///
    /// Entries removed while the walk is in progress are skipped, so a missing
    /// namespace lists as empty. So does a namespace path that is a plain file.
    pub fn show_namespace(&self, namespace: &str) -> StoreResult<Vec<String>> {
        let dir = self.namespace_path(namespace)?;
        let mut names = Vec::new();
        collect_databases(&dir, &mut names)?;
        names.sort();
        Ok(names)
    }
}

fn collect_databases(dir: &Path, names: &mut Vec<String>) -> io::Result<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e),
        };
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e),
        };

        if file_type.is_dir() {
            collect_databases(&entry.path(), names)?;
            continue;
        }

        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        if let Some(name) = file_name.strip_suffix(DB_SUFFIX) {
            names.push(name.to_string());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_namespace_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = SqliteStore::new(temp.path());

        store.new_namespace("team").unwrap();
        store.new_namespace("team").unwrap();
        assert!(temp.path().join("team").is_dir());
    }

    #[test]
    fn test_delete_missing_namespace_succeeds() {
        let temp = TempDir::new().unwrap();
        let store = SqliteStore::new(temp.path());

        store.delete_namespace("ghost").unwrap();
    }

    #[test]
    fn test_delete_namespace_removes_databases() {
        let temp = TempDir::new().unwrap();
        let store = SqliteStore::new(temp.path());

        store.create_db("team", "orders.db").unwrap();
        store.delete_namespace("team").unwrap();

        assert!(!temp.path().join("team").exists());
        assert!(store.show_namespace("team").unwrap().is_empty());
    }

    #[test]
    fn test_show_namespace_on_plain_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = SqliteStore::new(temp.path());

        fs::write(temp.path().join("plain"), b"not a directory").unwrap();
        assert!(store.show_namespace("plain").unwrap().is_empty());
    }

    #[test]
    fn test_show_namespace_filters_and_strips_suffix() {
        let temp = TempDir::new().unwrap();
        let store = SqliteStore::new(temp.path());

        store.create_db("team", "orders.db").unwrap();
        store.create_db("team", "users.db").unwrap();
        fs::write(temp.path().join("team/notes.txt"), b"x").unwrap();

        let names = store.show_namespace("team").unwrap();
        assert_eq!(names, vec!["orders".to_string(), "users".to_string()]);
    }

    #[test]
    fn test_show_namespace_descends_into_subdirectories() {
        let temp = TempDir::new().unwrap();
        let store = SqliteStore::new(temp.path());

        fs::create_dir_all(temp.path().join("team/archive")).unwrap();
        fs::write(temp.path().join("team/archive/old.db"), b"").unwrap();

        assert_eq!(store.show_namespace("team").unwrap(), vec!["old".to_string()]);
    }

    #[test]
    fn test_show_missing_namespace_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = SqliteStore::new(temp.path());

        assert!(store.show_namespace("ghost").unwrap().is_empty());
    }

    #[test]
    fn test_traversal_names_rejected() {
        let temp = TempDir::new().unwrap();
        let store = SqliteStore::new(temp.path().join("root"));

        assert!(store.new_namespace("..").unwrap_err().is_invalid_name());
        assert!(store.delete_namespace("../root").unwrap_err().is_invalid_name());
        assert!(temp.path().exists());
    }
}
