//! `SnapshotStore` implementations.

pub mod memory;
pub mod sqlite;

pub use memory::InMemorySnapshotStore;
pub use sqlite::SqliteSnapshotStore;

use huesight_core::config::StorageConfig;
use huesight_core::errors::StorageError;
use huesight_core::traits::SnapshotStore;

/// SQLite store at `database_path`, or an in-memory store when unset.
pub fn open_store(config: &StorageConfig) -> Result<Box<dyn SnapshotStore>, StorageError> {
    match &config.database_path {
        Some(path) => Ok(Box::new(SqliteSnapshotStore::open(path)?)),
        None => Ok(Box::new(InMemorySnapshotStore::new())),
    }
}
