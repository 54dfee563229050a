//! SQLite-backed snapshot store.
//!
//! Snapshots are stored as JSON text. Loading goes through
//! `AssessmentSnapshot::from_json_value`, so a row written by a build
//! with a different snapshot shape still restores what it can.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use huesight_core::errors::StorageError;
use huesight_core::models::AssessmentSnapshot;
use huesight_core::traits::SnapshotStore;
use rusqlite::Connection;

use crate::connection;
use crate::queries::snapshots;

pub struct SqliteSnapshotStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteSnapshotStore {
    /// Open (or create) a database file.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = connection::open(path)?;
        tracing::debug!(path = %path.display(), "opened snapshot database");
        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a private in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            conn: Mutex::new(connection::open_in_memory()?),
            path: None,
        })
    }

    /// Database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of stored sessions.
    pub fn session_count(&self) -> Result<usize, StorageError> {
        self.with_conn(|conn| snapshots::count(conn).map(|n| usize::try_from(n).unwrap_or(0)))
    }

    fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        f(&guard)
    }
}

impl SnapshotStore for SqliteSnapshotStore {
    fn save(&self, session_id: &str, snapshot: &AssessmentSnapshot) -> Result<(), StorageError> {
        let json = serde_json::to_string(snapshot)?;
        let questions = i64::try_from(snapshot.questions_asked()).unwrap_or(i64::MAX);
        let now = Utc::now().to_rfc3339();
        self.with_conn(|conn| snapshots::upsert(conn, session_id, &json, questions, &now))?;
        tracing::debug!(session_id, questions, "snapshot saved");
        Ok(())
    }

    fn load(&self, session_id: &str) -> Result<Option<AssessmentSnapshot>, StorageError> {
        let Some(row) = self.with_conn(|conn| snapshots::get(conn, session_id))? else {
            return Ok(None);
        };
        let value: serde_json::Value = serde_json::from_str(&row.snapshot_json)?;
        Ok(Some(AssessmentSnapshot::from_json_value(&value)))
    }

    fn delete(&self, session_id: &str) -> Result<bool, StorageError> {
        self.with_conn(|conn| snapshots::delete(conn, session_id))
    }

    fn list_sessions(&self) -> Result<Vec<String>, StorageError> {
        self.with_conn(snapshots::list_session_ids)
    }

    fn clear(&self) -> Result<usize, StorageError> {
        let removed = self.with_conn(snapshots::delete_all)?;
        tracing::info!(removed, "all snapshots cleared");
        Ok(removed)
    }
}

impl std::fmt::Debug for SqliteSnapshotStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteSnapshotStore")
            .field("path", &self.path)
            .finish()
    }
}
