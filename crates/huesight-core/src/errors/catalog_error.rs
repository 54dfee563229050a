//! Stimulus catalog errors.

use super::error_code::{self, HueSightErrorCode};

/// Errors detected while building a stimulus catalog.
///
/// All of these are configuration errors: a catalog that passes
/// validation can always produce a next stimulus.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog declares no categories")]
    NoCategories,

    #[error("catalog declares no stimuli")]
    NoStimuli,

    #[error("duplicate category name: {name}")]
    DuplicateCategory { name: String },

    #[error("category {name} has invalid weight {weight}: must be positive and finite")]
    InvalidWeight { name: String, weight: f64 },

    #[error("stimulus {index} references unknown category {category}")]
    UnknownCategory { index: usize, category: String },

    #[error("category {name} has no stimuli")]
    CategoryWithoutStimuli { name: String },

    #[error("stimulus {index} has correct option {option}, expected 0 or 1")]
    InvalidCorrectOption { index: usize, option: usize },

    #[error("difficulty {value} out of range 1..=5")]
    InvalidDifficulty { value: u8 },

    #[error("invalid colour {value:?}: expected #RRGGBB")]
    InvalidColor { value: String },

    #[error("catalog parse error: {message}")]
    ParseError { message: String },
}

impl HueSightErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
