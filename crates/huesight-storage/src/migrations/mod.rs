//! Schema migrations using PRAGMA user_version.

pub mod v001_snapshots;

use huesight_core::errors::StorageError;
use rusqlite::Connection;

/// Latest schema version.
pub const LATEST_VERSION: u32 = 1;

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current = current_version(conn).map_err(|e| StorageError::MigrationFailed {
        version: 0,
        message: e.to_string(),
    })?;

    let migrations: &[(&str, u32)] = &[(v001_snapshots::MIGRATION_SQL, 1)];

    for (sql, version) in migrations {
        if current < *version {
            conn.execute_batch(sql).map_err(|e| StorageError::MigrationFailed {
                version: *version,
                message: e.to_string(),
            })?;
            conn.pragma_update(None, "user_version", version)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    message: e.to_string(),
                })?;
            tracing::info!(version = version, "applied migration");
        }
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })
}
