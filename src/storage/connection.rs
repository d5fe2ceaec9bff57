//! Per-operation SQLite connections
//!
//! Every storage operation opens its own connection and closes it before
//! returning. No connection outlives a single operation.

use std::path::Path;
use std::time::Instant;

use log::{debug, error};
use rusqlite::Connection;

use crate::error::{RecipeError, RecipeResult};

/// Open a connection to the database file at `path`
pub fn open_connection(path: &Path) -> RecipeResult<Connection> {
    Connection::open(path).map_err(|e| {
        error!(
            "event=db_open status=error path={} error={}",
            path.display(),
            e
        );
        RecipeError::Database(format!("Failed to open {}: {}", path.display(), e))
    })
}

/// Run `op` on a fresh connection, then close it
///
/// Mutations run in autocommit mode, so a successful statement is committed
/// by the time `op` returns. Close failures are reported after the
/// operation's own error.
pub fn with_connection<T, F>(path: &Path, name: &'static str, op: F) -> RecipeResult<T>
where
    F: FnOnce(&Connection) -> rusqlite::Result<T>,
{
    let started_at = Instant::now();
    let conn = open_connection(path)?;

    let result = op(&conn);
    let closed = conn.close().map_err(|(_, e)| e);

    match (result, closed) {
        (Ok(value), Ok(())) => {
            debug!(
                "event=db_op op={} status=ok duration_ms={}",
                name,
                started_at.elapsed().as_millis()
            );
            Ok(value)
        }
        (Err(e), _) | (Ok(_), Err(e)) => {
            error!(
                "event=db_op op={} status=error duration_ms={} error={}",
                name,
                started_at.elapsed().as_millis(),
                e
            );
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_connection_returns_value() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("probe.db");

        let answer: i64 =
            with_connection(&path, "probe", |conn| conn.query_row("SELECT 42", [], |r| r.get(0)))
                .unwrap();
        assert_eq!(answer, 42);
        assert!(path.exists());
    }

    #[test]
    fn test_statement_errors_become_database_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("probe.db");

        let err = with_connection(&path, "broken", |conn| {
            conn.execute("SELECT * FROM missing_table", [])
        })
        .unwrap_err();
        assert!(matches!(err, RecipeError::Database(_)));
    }

    #[test]
    fn test_open_in_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no").join("such").join("dir.db");

        let err = open_connection(&path).unwrap_err();
        assert!(matches!(err, RecipeError::Database(_)));
    }
}
