use serde::{Deserialize, Serialize};
use std::fmt;

use super::ResponseRecord;

/// Severity classification of the aggregate estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityLabel {
    Normal,
    Mild,
    Moderate,
    Severe,
}

impl SeverityLabel {
    /// `> 0.7` Severe, `> 0.4` Moderate, `> 0.15` Mild, otherwise Normal.
    pub fn from_severity(severity: f64) -> Self {
        if severity > 0.7 {
            Self::Severe
        } else if severity > 0.4 {
            Self::Moderate
        } else if severity > 0.15 {
            Self::Mild
        } else {
            Self::Normal
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }
}

impl fmt::Display for SeverityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-category summary for every category with at least one observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub accuracy: f64,
    pub total: u32,
    pub error_rate: f64,
    /// 95% equal-tailed credible interval of the error rate.
    pub error_rate_interval: (f64, f64),
}

/// Full assessment summary. Produced without mutating engine state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub total_questions: usize,
    pub accuracy: f64,
    pub severity_estimate: f64,
    pub severity_label: SeverityLabel,
    pub confidence_level: f64,
    /// In category order.
    pub category_breakdown: Vec<CategoryBreakdown>,
    pub response_history: Vec<ResponseRecord>,
    pub recommendation: String,
    pub average_response_time_ms: f64,
    pub average_difficulty: f64,
}

impl AssessmentReport {
    pub fn correct_answers(&self) -> usize {
        self.response_history.iter().filter(|r| r.is_correct).count()
    }

    pub fn breakdown_for(&self, category: &str) -> Option<&CategoryBreakdown> {
        self.category_breakdown.iter().find(|b| b.category == category)
    }
}
