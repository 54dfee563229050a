//! # huesight-core
//!
//! Foundation crate for the HueSight colour-vision assessment engine.
//! Defines shared types, traits, errors, config, events, tracing setup,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::HueSightConfig;
pub use errors::{CatalogError, ConfigError, StorageError};
pub use models::{
    AssessmentReport, AssessmentSnapshot, AssessmentStats, CategoryBreakdown, CategoryRecord,
    Color, ConfusionCategory, Difficulty, ResponseRecord, SeverityLabel, StimulusPair,
};
pub use traits::{RandomSource, SnapshotStore};
