//! Confidence: how narrow the least-certain category posterior is.
//!
//! Per category the approximate 95% interval width `min(4σ, 1)` maps to
//! `max(0, 1 − 2·width)`; the global value is the minimum over non-control
//! categories, so one untested category pins it at zero.

use huesight_core::models::ConfusionCategory;

use crate::beta;
use crate::model::CategoryModel;

/// Confidence in a single category, 0 before any observation.
pub fn category_confidence(category: &ConfusionCategory) -> f64 {
    if !category.is_observed() {
        return 0.0;
    }
    let width = beta::interval_width(category.posterior_alpha, category.posterior_beta);
    (1.0 - 2.0 * width).max(0.0)
}

/// Global confidence in [0, 1].
///
/// Zero when no response has been recorded or the model has no
/// non-control categories.
pub fn estimate_confidence(model: &CategoryModel, responses: usize) -> f64 {
    if responses == 0 {
        return 0.0;
    }
    model
        .diagnostic()
        .map(category_confidence)
        .reduce(f64::min)
        .unwrap_or(0.0)
        .clamp(0.0, 1.0)
}
