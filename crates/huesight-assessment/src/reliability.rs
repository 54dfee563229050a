//! Advisory stopping guidance.
//!
//! The engine never stops a session on its own; callers consult this
//! advisor and end the session themselves.

use huesight_core::config::AssessmentConfig;

/// Minimum-length gate, confidence threshold, and soft ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReliabilityAdvisor {
    pub min_questions: usize,
    pub confidence_threshold: f64,
    pub max_questions: usize,
}

impl ReliabilityAdvisor {
    pub fn from_config(config: &AssessmentConfig) -> Self {
        Self {
            min_questions: config.effective_min_questions(),
            confidence_threshold: config.effective_confidence_threshold(),
            max_questions: config.effective_max_questions(),
        }
    }

    /// False below `min_questions`, then `confidence ≥ confidence_threshold`.
    pub fn has_reliable_data(&self, questions_asked: usize, confidence: f64) -> bool {
        questions_asked >= self.min_questions && confidence >= self.confidence_threshold
    }

    /// True once the soft ceiling is reached. Advisory only.
    pub fn soft_limit_reached(&self, questions_asked: usize) -> bool {
        questions_asked >= self.max_questions
    }
}

impl Default for ReliabilityAdvisor {
    fn default() -> Self {
        Self::from_config(&AssessmentConfig::default())
    }
}
