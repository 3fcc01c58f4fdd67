//! Path resolution for namespaces and database files
//!
//! A namespace is always exactly one directory below the data root and a
//! database is always exactly one file below its namespace directory.

use std::path::{Path, PathBuf};

use super::errors::{StoreError, StoreResult};

/// File extension of every database file
pub const DB_SUFFIX: &str = ".db";

/// Append the database suffix to a caller-facing database name
pub fn db_file_name(db_name: &str) -> String {
    format!("{}{}", db_name, DB_SUFFIX)
}

/// Join root, namespace and database file name.
///
/// Pure composition, no existence check and no validation.
pub fn resolve(root: &Path, namespace: &str, db_file: &str) -> PathBuf {
    root.join(namespace).join(db_file)
}

/// Whether `name` is usable as a single path segment
pub fn is_valid_segment(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

/// Reject names that would escape their parent directory
pub fn check_segment(name: &str) -> StoreResult<()> {
    if is_valid_segment(name) {
        Ok(())
    } else {
        Err(StoreError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_layout() {
        let path = resolve(Path::new("/srv/data"), "team", "orders.db");
        assert_eq!(path, PathBuf::from("/srv/data/team/orders.db"));
    }

    #[test]
    fn test_db_file_name() {
        assert_eq!(db_file_name("orders"), "orders.db");
    }

    #[test]
    fn test_segment_rules() {
        assert!(is_valid_segment("team"));
        assert!(is_valid_segment("team.v2"));
        assert!(is_valid_segment("..hidden"));

        assert!(!is_valid_segment(""));
        assert!(!is_valid_segment("."));
        assert!(!is_valid_segment(".."));
        assert!(!is_valid_segment("a/b"));
        assert!(!is_valid_segment("a\\b"));
        assert!(!is_valid_segment("a\0b"));
    }

    #[test]
    fn test_check_segment_error() {
        assert!(check_segment("ok").is_ok());
        assert!(matches!(check_segment("../x"), Err(StoreError::InvalidName(_))));
    }
}
