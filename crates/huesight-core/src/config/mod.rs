//! Configuration system for HueSight.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod assessment_config;
pub mod huesight_config;
pub mod storage_config;

pub use assessment_config::AssessmentConfig;
pub use huesight_config::HueSightConfig;
pub use storage_config::StorageConfig;
