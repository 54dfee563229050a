//! Persistence seam for assessment snapshots.

use crate::errors::StorageError;
use crate::models::AssessmentSnapshot;

/// Durable storage of snapshots keyed by a caller-chosen session id.
///
/// The engine never calls this itself; the host saves after each
/// response or at session boundaries, and restores on resume.
pub trait SnapshotStore: Send + Sync {
    /// Insert or replace the snapshot for `session_id`.
    fn save(&self, session_id: &str, snapshot: &AssessmentSnapshot) -> Result<(), StorageError>;

    /// Load a snapshot, `None` if the session is unknown.
    fn load(&self, session_id: &str) -> Result<Option<AssessmentSnapshot>, StorageError>;

    /// Remove a session. Returns whether anything was deleted.
    fn delete(&self, session_id: &str) -> Result<bool, StorageError>;

    /// Session ids, most recently saved first.
    fn list_sessions(&self) -> Result<Vec<String>, StorageError>;

    /// Remove every session. Returns how many were removed.
    fn clear(&self) -> Result<usize, StorageError>;
}
