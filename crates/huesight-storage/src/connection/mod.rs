//! Opening SQLite connections with pragmas and migrations applied.

pub mod pragmas;

use std::path::Path;

use huesight_core::errors::StorageError;
use rusqlite::Connection;

use self::pragmas::{apply_memory_pragmas, apply_pragmas};
use crate::migrations;

/// Open a database file, apply pragmas, run migrations.
pub fn open(path: &Path) -> Result<Connection, StorageError> {
    let conn = Connection::open(path).map_err(|e| StorageError::SqliteError {
        message: format!("open {}: {e}", path.display()),
    })?;
    apply_pragmas(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Open a private in-memory database (for testing).
pub fn open_in_memory() -> Result<Connection, StorageError> {
    let conn = Connection::open_in_memory().map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;
    apply_memory_pragmas(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}
