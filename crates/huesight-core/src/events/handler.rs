//! AssessmentEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing assessment events.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about.
pub trait AssessmentEventHandler: Send + Sync {
    // ---- Selection ----
    fn on_stimulus_selected(&self, _event: &StimulusSelectedEvent) {}
    fn on_exploration_toggled(&self, _event: &ExplorationToggledEvent) {}

    // ---- Belief updates ----
    fn on_response_recorded(&self, _event: &ResponseRecordedEvent) {}
    fn on_unknown_category(&self, _event: &UnknownCategoryEvent) {}
    fn on_reliability_reached(&self, _event: &ReliabilityReachedEvent) {}

    // ---- Persistence ----
    fn on_state_imported(&self, _event: &StateImportedEvent) {}
}
