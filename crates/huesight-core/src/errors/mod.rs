//! Error handling for HueSight.
//! One error enum per subsystem, `thiserror` only.
//!
//! Runtime assessment operations never fail; these errors surface only at
//! construction (catalog, config) and at the persistence boundary.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod storage_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::HueSightErrorCode;
pub use storage_error::StorageError;
