//! Queries for the assessment_snapshots table.

use huesight_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};

/// A stored snapshot row, JSON still encoded.
#[derive(Debug, Clone)]
pub struct SnapshotRow {
    pub session_id: String,
    pub snapshot_json: String,
    pub questions: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Insert or replace a session's snapshot, bumping its revision.
pub fn upsert(
    conn: &Connection,
    session_id: &str,
    snapshot_json: &str,
    questions: i64,
    now: &str,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO assessment_snapshots
            (session_id, snapshot_json, questions, created_at, updated_at, revision)
         VALUES (?1, ?2, ?3, ?4, ?4,
            (SELECT COALESCE(MAX(revision), 0) + 1 FROM assessment_snapshots))
         ON CONFLICT(session_id) DO UPDATE SET
            snapshot_json = excluded.snapshot_json,
            questions = excluded.questions,
            updated_at = excluded.updated_at,
            revision = excluded.revision",
        params![session_id, snapshot_json, questions, now],
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(())
}

/// Fetch one session's row.
pub fn get(conn: &Connection, session_id: &str) -> Result<Option<SnapshotRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT session_id, snapshot_json, questions, created_at, updated_at
             FROM assessment_snapshots WHERE session_id = ?1",
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let row = stmt
        .query_row(params![session_id], |row| {
            Ok(SnapshotRow {
                session_id: row.get(0)?,
                snapshot_json: row.get(1)?,
                questions: row.get(2)?,
                created_at: row.get(3)?,
                updated_at: row.get(4)?,
            })
        })
        .optional()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(row)
}

/// Delete one session. Returns whether a row was removed.
pub fn delete(conn: &Connection, session_id: &str) -> Result<bool, StorageError> {
    let removed = conn
        .execute(
            "DELETE FROM assessment_snapshots WHERE session_id = ?1",
            params![session_id],
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(removed > 0)
}

/// Delete every session. Returns the number of rows removed.
pub fn delete_all(conn: &Connection) -> Result<usize, StorageError> {
    conn.execute("DELETE FROM assessment_snapshots", [])
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Session ids, most recently saved first.
pub fn list_session_ids(conn: &Connection) -> Result<Vec<String>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT session_id FROM assessment_snapshots ORDER BY revision DESC")
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    let rows = stmt
        .query_map([], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    rows.collect::<Result<Vec<String>, _>>()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Number of stored sessions.
pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM assessment_snapshots", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}
