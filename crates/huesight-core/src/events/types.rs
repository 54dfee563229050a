//! Event payload types.

use crate::models::SelectionMode;

/// Payload for `on_stimulus_selected`.
#[derive(Debug, Clone)]
pub struct StimulusSelectedEvent {
    pub category: String,
    pub mode: SelectionMode,
    /// Exploitation score of the winning stimulus; `None` in exploration mode.
    pub score: Option<f64>,
    /// Observation count of the chosen category at selection time.
    pub observations: u32,
}

/// Payload for `on_response_recorded`.
#[derive(Debug, Clone)]
pub struct ResponseRecordedEvent {
    pub category: String,
    pub is_correct: bool,
    pub response_time_ms: u64,
    pub questions_asked: usize,
    pub severity_estimate: f64,
    pub confidence_level: f64,
}

/// Payload for `on_unknown_category`.
#[derive(Debug, Clone)]
pub struct UnknownCategoryEvent {
    pub category: String,
}

/// Payload for `on_exploration_toggled`.
#[derive(Debug, Clone)]
pub struct ExplorationToggledEvent {
    pub enabled: bool,
}

/// Payload for `on_state_imported`.
#[derive(Debug, Clone)]
pub struct StateImportedEvent {
    pub questions_asked: usize,
    pub category_count: usize,
    pub confidence_level: f64,
}

/// Payload for `on_reliability_reached`.
#[derive(Debug, Clone)]
pub struct ReliabilityReachedEvent {
    pub questions_asked: usize,
    pub confidence_level: f64,
}
