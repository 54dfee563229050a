//! EventDispatcher: synchronous event dispatch, free when empty.

use std::sync::Arc;

use super::handler::AssessmentEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn AssessmentEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn AssessmentEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and does not prevent subsequent
    /// handlers from receiving the event.
    fn emit<F: Fn(&dyn AssessmentEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("assessment event handler panicked");
            }
        }
    }

    pub fn emit_stimulus_selected(&self, event: &StimulusSelectedEvent) {
        self.emit(|h| h.on_stimulus_selected(event));
    }

    pub fn emit_exploration_toggled(&self, event: &ExplorationToggledEvent) {
        self.emit(|h| h.on_exploration_toggled(event));
    }

    pub fn emit_response_recorded(&self, event: &ResponseRecordedEvent) {
        self.emit(|h| h.on_response_recorded(event));
    }

    pub fn emit_unknown_category(&self, event: &UnknownCategoryEvent) {
        self.emit(|h| h.on_unknown_category(event));
    }

    pub fn emit_reliability_reached(&self, event: &ReliabilityReachedEvent) {
        self.emit(|h| h.on_reliability_reached(event));
    }

    pub fn emit_state_imported(&self, event: &StateImportedEvent) {
        self.emit(|h| h.on_state_imported(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
