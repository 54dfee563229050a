//! Persistence-layer errors.

use super::error_code::{self, HueSightErrorCode};

/// Errors raised by snapshot stores.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("snapshot serialization failed: {message}")]
    Serialization { message: String },

    #[error("store lock poisoned")]
    LockPoisoned,
}

impl HueSightErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            Self::Serialization { .. } => error_code::SERIALIZATION_ERROR,
            _ => error_code::STORAGE_ERROR,
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}
