//! In-process snapshot store.

use std::sync::Mutex;

use huesight_core::errors::StorageError;
use huesight_core::models::AssessmentSnapshot;
use huesight_core::traits::SnapshotStore;
use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
struct Inner {
    /// session id → (revision, snapshot)
    sessions: FxHashMap<String, (u64, AssessmentSnapshot)>,
    next_revision: u64,
}

/// Keeps snapshots for the life of the process.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    inner: Mutex<Inner>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map_or(0, |inner| inner.sessions.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn save(&self, session_id: &str, snapshot: &AssessmentSnapshot) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().map_err(|_| StorageError::LockPoisoned)?;
        inner.next_revision += 1;
        let revision = inner.next_revision;
        inner
            .sessions
            .insert(session_id.to_string(), (revision, snapshot.clone()));
        Ok(())
    }

    fn load(&self, session_id: &str) -> Result<Option<AssessmentSnapshot>, StorageError> {
        let inner = self.inner.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(inner.sessions.get(session_id).map(|(_, snap)| snap.clone()))
    }

    fn delete(&self, session_id: &str) -> Result<bool, StorageError> {
        let mut inner = self.inner.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(inner.sessions.remove(session_id).is_some())
    }

    fn list_sessions(&self) -> Result<Vec<String>, StorageError> {
        let inner = self.inner.lock().map_err(|_| StorageError::LockPoisoned)?;
        let mut entries: Vec<(u64, &String)> = inner
            .sessions
            .iter()
            .map(|(id, (revision, _))| (*revision, id))
            .collect();
        entries.sort_unstable_by(|a, b| b.0.cmp(&a.0));
        Ok(entries.into_iter().map(|(_, id)| id.clone()).collect())
    }

    fn clear(&self) -> Result<usize, StorageError> {
        let mut inner = self.inner.lock().map_err(|_| StorageError::LockPoisoned)?;
        let removed = inner.sessions.len();
        inner.sessions.clear();
        Ok(removed)
    }
}
