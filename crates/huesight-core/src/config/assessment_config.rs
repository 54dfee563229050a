//! Assessment engine configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the adaptive assessment engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Prior α of every category's Beta posterior. Default: 2.0.
    pub prior_alpha: Option<f64>,
    /// Prior β of every category's Beta posterior. Default: 2.0.
    pub prior_beta: Option<f64>,
    /// Global confidence required for reliable data. Default: 0.85.
    pub confidence_threshold: Option<f64>,
    /// Responses required before reliability is considered. Default: 8.
    pub min_questions: Option<usize>,
    /// Soft session ceiling, advisory only. Default: 25.
    pub max_questions: Option<usize>,
    /// Seed for the exploration-mode random source. Default: entropy.
    pub seed: Option<u64>,
    /// Custom stimulus catalog (TOML). Default: the built-in catalog.
    pub catalog_path: Option<PathBuf>,
}

impl AssessmentConfig {
    pub fn effective_prior_alpha(&self) -> f64 {
        self.prior_alpha.unwrap_or(constants::DEFAULT_PRIOR_ALPHA)
    }

    pub fn effective_prior_beta(&self) -> f64 {
        self.prior_beta.unwrap_or(constants::DEFAULT_PRIOR_BETA)
    }

    pub fn effective_confidence_threshold(&self) -> f64 {
        self.confidence_threshold
            .unwrap_or(constants::DEFAULT_CONFIDENCE_THRESHOLD)
    }

    pub fn effective_min_questions(&self) -> usize {
        self.min_questions.unwrap_or(constants::DEFAULT_MIN_QUESTIONS)
    }

    pub fn effective_max_questions(&self) -> usize {
        self.max_questions.unwrap_or(constants::DEFAULT_MAX_QUESTIONS)
    }
}
