//! Snapshot storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the snapshot persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database file. `None` keeps snapshots in memory.
    pub database_path: Option<PathBuf>,
}
