//! PRAGMA configuration applied to every SQLite connection.
//!
//! WAL mode, NORMAL sync, 5s busy_timeout, temp_store MEMORY.

use huesight_core::errors::StorageError;
use rusqlite::Connection;

/// Pragmas for a file-backed database.
pub fn apply_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(|e| StorageError::SqliteError {
        message: format!("failed to apply pragmas: {e}"),
    })
}

/// Pragmas for an in-memory database. WAL does not apply.
pub fn apply_memory_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch("PRAGMA temp_store = MEMORY;")
        .map_err(|e| StorageError::SqliteError {
            message: format!("failed to apply pragmas: {e}"),
        })
}

/// Verify that WAL mode is active.
pub fn verify_wal_mode(conn: &Connection) -> Result<bool, StorageError> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
