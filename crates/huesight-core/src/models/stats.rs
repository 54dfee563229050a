use serde::{Deserialize, Serialize};

/// Live session statistics for progress display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentStats {
    pub questions_asked: usize,
    pub confidence_level: f64,
    pub confidence_threshold: f64,
    pub severity_estimate: f64,
    pub is_reliable: bool,
    pub exploration_mode: bool,
    /// Categories with at least one observation.
    pub categories_explored: usize,
    pub total_categories: usize,
}
