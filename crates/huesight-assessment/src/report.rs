//! Assessment report: a pure read over the engine state.

use huesight_core::models::{
    AssessmentReport, CategoryBreakdown, ConfusionCategory, ResponseRecord, SeverityLabel,
};

use crate::beta;
use crate::model::CategoryModel;

/// Mass of the per-category credible interval.
const INTERVAL_LEVEL: f64 = 0.95;

const RECOMMENDATION_NORMAL: &str =
    "Your color vision appears normal! You show no significant signs of deuteranomaly.";
const RECOMMENDATION_MILD: &str = "You may have mild deuteranomaly (red-green color vision \
     difference). This typically doesn't affect daily life significantly.";
const RECOMMENDATION_MODERATE: &str = "You likely have moderate deuteranomaly. You may notice \
     some difficulty distinguishing certain reds and greens.";
const RECOMMENDATION_SEVERE: &str = "You show signs of significant deuteranomaly. Consider \
     consulting an eye care professional for a comprehensive color vision assessment.";

/// Fixed advice text for a severity: bands `< 0.1`, `< 0.3`, `< 0.6`, else.
pub fn recommendation(severity: f64) -> &'static str {
    if severity < 0.1 {
        RECOMMENDATION_NORMAL
    } else if severity < 0.3 {
        RECOMMENDATION_MILD
    } else if severity < 0.6 {
        RECOMMENDATION_MODERATE
    } else {
        RECOMMENDATION_SEVERE
    }
}

/// Breakdown entry for an observed category, `None` otherwise.
pub fn breakdown(category: &ConfusionCategory) -> Option<CategoryBreakdown> {
    let accuracy = category.accuracy()?;
    let error_rate = category.error_rate()?;
    // Interval is over P(correct); flip it onto the error rate.
    let (low, high) =
        beta::credible_interval(category.posterior_alpha, category.posterior_beta, INTERVAL_LEVEL);
    Some(CategoryBreakdown {
        category: category.name.clone(),
        accuracy,
        total: category.observations(),
        error_rate,
        error_rate_interval: (1.0 - high, 1.0 - low),
    })
}

/// Assemble a report from the current state.
pub fn build_report(
    model: &CategoryModel,
    history: &[ResponseRecord],
    severity_estimate: f64,
    confidence_level: f64,
) -> AssessmentReport {
    let total = history.len();
    let correct = history.iter().filter(|r| r.is_correct).count();

    AssessmentReport {
        total_questions: total,
        accuracy: ratio(correct as f64, total),
        severity_estimate,
        severity_label: SeverityLabel::from_severity(severity_estimate),
        confidence_level,
        category_breakdown: model.iter().filter_map(breakdown).collect(),
        response_history: history.to_vec(),
        recommendation: recommendation(severity_estimate).to_string(),
        average_response_time_ms: ratio(
            history.iter().map(|r| r.response_time.as_secs_f64() * 1000.0).sum(),
            total,
        ),
        average_difficulty: ratio(
            history
                .iter()
                .map(|r| f64::from(r.stimulus.difficulty.value()))
                .sum(),
            total,
        ),
    }
}

fn ratio(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_bands() {
        assert_eq!(recommendation(0.0), RECOMMENDATION_NORMAL);
        assert_eq!(recommendation(0.099), RECOMMENDATION_NORMAL);
        assert_eq!(recommendation(0.1), RECOMMENDATION_MILD);
        assert_eq!(recommendation(0.3), RECOMMENDATION_MODERATE);
        assert_eq!(recommendation(0.6), RECOMMENDATION_SEVERE);
        assert_eq!(recommendation(1.0), RECOMMENDATION_SEVERE);
    }

    #[test]
    fn empty_report() {
        let model = CategoryModel::from_categories(vec![ConfusionCategory::new(
            "control", 0.8, 2.0, 2.0,
        )]);
        let report = build_report(&model, &[], 0.5, 0.0);
        assert_eq!(report.total_questions, 0);
        assert_eq!(report.accuracy, 0.0);
        assert_eq!(report.severity_label, SeverityLabel::Moderate);
        assert!(report.category_breakdown.is_empty());
        assert_eq!(report.average_response_time_ms, 0.0);
        assert_eq!(report.average_difficulty, 0.0);
    }

    #[test]
    fn breakdown_interval_brackets_error_rate() {
        let mut c = ConfusionCategory::new("red-brown", 2.5, 2.0, 2.0);
        c.correct_count = 1;
        c.incorrect_count = 5;
        c.posterior_alpha = 3.0;
        c.posterior_beta = 7.0;
        let b = breakdown(&c).unwrap();
        assert_eq!(b.total, 6);
        assert!((b.error_rate - 5.0 / 6.0).abs() < 1e-12);
        let (low, high) = b.error_rate_interval;
        assert!(low < 0.7 && 0.7 < high, "posterior mean error 0.7 not in ({low}, {high})");
    }

    #[test]
    fn unobserved_category_has_no_breakdown() {
        assert!(breakdown(&ConfusionCategory::new("a", 1.0, 2.0, 2.0)).is_none());
    }
}
