//! Top-level HueSight configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AssessmentConfig, StorageConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`HUESIGHT_*`)
/// 2. Project config (`huesight.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct HueSightConfig {
    pub assessment: AssessmentConfig,
    pub storage: StorageConfig,
}

impl HueSightConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(constants::CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &HueSightConfig) -> Result<(), ConfigError> {
        let a = &config.assessment;
        for (field, value) in [
            ("assessment.prior_alpha", a.prior_alpha),
            ("assessment.prior_beta", a.prior_beta),
        ] {
            if let Some(v) = value {
                if !(v.is_finite() && v > 0.0) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a positive finite number".to_string(),
                    });
                }
            }
        }
        if let Some(threshold) = a.confidence_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "assessment.confidence_threshold".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if a.effective_min_questions() > a.effective_max_questions() {
            return Err(ConfigError::ValidationFailed {
                field: "assessment.min_questions".to_string(),
                message: "must not exceed assessment.max_questions".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut HueSightConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: HueSightConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut HueSightConfig, other: &HueSightConfig) {
        let (b, o) = (&mut base.assessment, &other.assessment);
        if o.prior_alpha.is_some() {
            b.prior_alpha = o.prior_alpha;
        }
        if o.prior_beta.is_some() {
            b.prior_beta = o.prior_beta;
        }
        if o.confidence_threshold.is_some() {
            b.confidence_threshold = o.confidence_threshold;
        }
        if o.min_questions.is_some() {
            b.min_questions = o.min_questions;
        }
        if o.max_questions.is_some() {
            b.max_questions = o.max_questions;
        }
        if o.seed.is_some() {
            b.seed = o.seed;
        }
        if o.catalog_path.is_some() {
            b.catalog_path = o.catalog_path.clone();
        }

        if other.storage.database_path.is_some() {
            base.storage.database_path = other.storage.database_path.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `HUESIGHT_ASSESSMENT_SEED`, `HUESIGHT_STORAGE_DATABASE_PATH`, etc.
    fn apply_env_overrides(config: &mut HueSightConfig) {
        if let Some(v) = env_parse::<f64>("HUESIGHT_ASSESSMENT_PRIOR_ALPHA") {
            config.assessment.prior_alpha = Some(v);
        }
        if let Some(v) = env_parse::<f64>("HUESIGHT_ASSESSMENT_PRIOR_BETA") {
            config.assessment.prior_beta = Some(v);
        }
        if let Some(v) = env_parse::<f64>("HUESIGHT_ASSESSMENT_CONFIDENCE_THRESHOLD") {
            config.assessment.confidence_threshold = Some(v);
        }
        if let Some(v) = env_parse::<usize>("HUESIGHT_ASSESSMENT_MIN_QUESTIONS") {
            config.assessment.min_questions = Some(v);
        }
        if let Some(v) = env_parse::<usize>("HUESIGHT_ASSESSMENT_MAX_QUESTIONS") {
            config.assessment.max_questions = Some(v);
        }
        if let Some(v) = env_parse::<u64>("HUESIGHT_ASSESSMENT_SEED") {
            config.assessment.seed = Some(v);
        }
        if let Ok(val) = std::env::var("HUESIGHT_ASSESSMENT_CATALOG_PATH") {
            config.assessment.catalog_path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("HUESIGHT_STORAGE_DATABASE_PATH") {
            config.storage.database_path = Some(PathBuf::from(val));
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
