//! Severity: evidence-weighted mean of per-category error rates.
//!
//! Each observed non-control category contributes its error rate with
//! weight `category_weight · sqrt(observations)`, so heavily tested and
//! diagnostically important categories dominate.

use huesight_core::constants::UNINFORMED_SEVERITY;

use crate::model::CategoryModel;

/// Severity in [0, 1]; 0.5 until some non-control category is observed.
pub fn estimate_severity(model: &CategoryModel) -> f64 {
    let mut weighted_errors = 0.0;
    let mut total_weight = 0.0;

    for category in model.diagnostic() {
        let Some(error_rate) = category.error_rate() else {
            continue;
        };
        let evidence_weight = category.weight * f64::from(category.observations()).sqrt();
        weighted_errors += error_rate * evidence_weight;
        total_weight += evidence_weight;
    }

    if total_weight > 0.0 {
        (weighted_errors / total_weight).clamp(0.0, 1.0)
    } else {
        UNINFORMED_SEVERITY
    }
}
