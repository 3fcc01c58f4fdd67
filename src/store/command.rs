//! Command bridge: run caller SQL against a database file
//!
//! The SQL text is passed to SQLite verbatim. Each call opens its own
//! connection without the create flag and drops it before returning.

use std::path::Path;

use rusqlite::{Batch, Connection, OpenFlags, Statement};

use super::database::display_name;
use super::errors::{StoreError, StoreResult};
use super::marshal::{marshal_row, Row};
use super::SqliteStore;

impl SqliteStore {
    /// Run a mutating command and return the number of affected rows.
    ///
    /// The text may hold several statements; the count reflects the last
    /// INSERT, UPDATE or DELETE run on this call's connection.
    pub fn execute(&self, namespace: &str, db_file: &str, sql: &str) -> StoreResult<u64> {
        let conn = self.open_existing(namespace, db_file)?;
        conn.execute_batch(sql)?;
        Ok(conn.changes() as u64)
    }

    /// Run a query and return every row as a column-name to text map.
    ///
    /// The text may hold several statements. Each one is stepped to
    /// completion in order and the rows of the last statement are returned.
    pub fn query(&self, namespace: &str, db_file: &str, sql: &str) -> StoreResult<Vec<Row>> {
        let conn = self.open_existing(namespace, db_file)?;
        let mut batch = Batch::new(&conn, sql);

        let mut result = Vec::new();
        while let Some(mut stmt) = batch.next()? {
            result = collect_rows(&mut stmt)?;
        }
        Ok(result)
    }

    fn open_existing(&self, namespace: &str, db_file: &str) -> StoreResult<Connection> {
        let path = self.db_path(namespace, db_file)?;
        if !path.is_file() {
            return Err(StoreError::NotFound(display_name(namespace, db_file)));
        }
        open_read_write(&path)
    }
}

fn collect_rows(stmt: &mut Statement<'_>) -> StoreResult<Vec<Row>> {
    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(String::from)
        .collect();

    let mut result = Vec::new();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        result.push(marshal_row(row, &columns)?);
    }
    Ok(result)
}

fn open_read_write(path: &Path) -> StoreResult<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    Ok(Connection::open_with_flags(path, flags)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with_db(temp: &TempDir) -> SqliteStore {
        let store = SqliteStore::new(temp.path());
        store.create_db("team", "fick.db").unwrap();
        store
    }

    #[test]
    fn test_execute_reports_affected_rows() {
        let temp = TempDir::new().unwrap();
        let store = store_with_db(&temp);

        assert_eq!(store.execute("team", "fick.db", "create table t(a int)").unwrap(), 0);
        assert_eq!(store.execute("team", "fick.db", "insert into t values(1)").unwrap(), 1);
        assert_eq!(
            store
                .execute("team", "fick.db", "insert into t values(2), (3)")
                .unwrap(),
            2
        );
        assert_eq!(store.execute("team", "fick.db", "update t set a = a + 1").unwrap(), 3);
    }

    #[test]
    fn test_execute_accepts_multiple_statements() {
        let temp = TempDir::new().unwrap();
        let store = store_with_db(&temp);

        store
            .execute(
                "team",
                "fick.db",
                "create table t(a int); insert into t values(1); insert into t values(2);",
            )
            .unwrap();

        let rows = store.query("team", "fick.db", "select count(*) as n from t").unwrap();
        assert_eq!(rows[0]["n"], "2");
    }

    #[test]
    fn test_query_runs_every_statement() {
        let temp = TempDir::new().unwrap();
        let store = store_with_db(&temp);

        let rows = store
            .query(
                "team",
                "fick.db",
                "create table t(a int); insert into t values(1); select a from t",
            )
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["a"], "1");

        let rows = store.query("team", "fick.db", "select 1 as x; select 2 as y").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["y"], "2");
        assert!(!rows[0].contains_key("x"));
    }

    #[test]
    fn test_query_with_trailing_write_keeps_the_write() {
        let temp = TempDir::new().unwrap();
        let store = store_with_db(&temp);

        store.execute("team", "fick.db", "create table t(a int)").unwrap();
        let rows = store
            .query("team", "fick.db", "select a from t; insert into t values(5)")
            .unwrap();
        assert!(rows.is_empty());

        let rows = store.query("team", "fick.db", "select a from t").unwrap();
        assert_eq!(rows[0]["a"], "5");
    }

    #[test]
    fn test_query_returns_text_rows() {
        let temp = TempDir::new().unwrap();
        let store = store_with_db(&temp);

        store
            .execute("team", "fick.db", "create table COMPANY(ID int, NAME text)")
            .unwrap();
        store
            .execute("team", "fick.db", "insert into COMPANY values(1, 'fick')")
            .unwrap();

        let rows = store.query("team", "fick.db", "select * from COMPANY").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0]["ID"], "1");
        assert_eq!(rows[0]["NAME"], "fick");
    }

    #[test]
    fn test_query_with_no_rows_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_with_db(&temp);

        store.execute("team", "fick.db", "create table t(a int)").unwrap();
        assert!(store.query("team", "fick.db", "select * from t").unwrap().is_empty());
    }

    #[test]
    fn test_missing_db_is_not_found_and_not_created() {
        let temp = TempDir::new().unwrap();
        let store = SqliteStore::new(temp.path());
        store.new_namespace("team").unwrap();

        assert!(store
            .execute("team", "ghost.db", "create table t(a int)")
            .unwrap_err()
            .is_not_found());
        assert!(store
            .query("team", "ghost.db", "select 1")
            .unwrap_err()
            .is_not_found());
        assert!(!temp.path().join("team/ghost.db").exists());
    }

    #[test]
    fn test_engine_errors_propagate() {
        let temp = TempDir::new().unwrap();
        let store = store_with_db(&temp);

        let err = store.execute("team", "fick.db", "not valid sql").unwrap_err();
        assert!(matches!(err, StoreError::Execution(_)));
        assert!(err.to_string().contains("syntax error"));

        let err = store.query("team", "fick.db", "select * from missing").unwrap_err();
        assert!(err.to_string().contains("no such table"));
    }

    #[test]
    fn test_size_grows_after_writes() {
        let temp = TempDir::new().unwrap();
        let store = store_with_db(&temp);

        assert_eq!(store.db_size("team", "fick.db").unwrap(), 0);
        store.execute("team", "fick.db", "create table t(a int)").unwrap();
        store.execute("team", "fick.db", "insert into t values(1)").unwrap();
        assert!(store.db_size("team", "fick.db").unwrap() > 0);
    }
}
