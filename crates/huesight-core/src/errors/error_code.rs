//! HueSightErrorCode trait for stable, machine-readable error codes.

/// Trait for mapping HueSight errors to stable error code strings.
/// Every error enum implements this so collaborators (UI, persistence
/// bridges) can branch on a code instead of parsing messages.
pub trait HueSightErrorCode {
    /// Returns the error code string (e.g., "CATALOG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
