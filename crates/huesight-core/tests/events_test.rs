//! Tests for the assessment event system.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use huesight_core::events::*;
use huesight_core::models::SelectionMode;

struct CountingHandler {
    selected: AtomicUsize,
    recorded: AtomicUsize,
    unknown: AtomicUsize,
}

impl CountingHandler {
    fn new() -> Self {
        Self {
            selected: AtomicUsize::new(0),
            recorded: AtomicUsize::new(0),
            unknown: AtomicUsize::new(0),
        }
    }
}

impl AssessmentEventHandler for CountingHandler {
    fn on_stimulus_selected(&self, _event: &StimulusSelectedEvent) {
        self.selected.fetch_add(1, Ordering::Relaxed);
    }

    fn on_response_recorded(&self, _event: &ResponseRecordedEvent) {
        self.recorded.fetch_add(1, Ordering::Relaxed);
    }

    fn on_unknown_category(&self, _event: &UnknownCategoryEvent) {
        self.unknown.fetch_add(1, Ordering::Relaxed);
    }
}

fn selected_event() -> StimulusSelectedEvent {
    StimulusSelectedEvent {
        category: "red-green-primary".into(),
        mode: SelectionMode::Exploitation,
        score: Some(0.5),
        observations: 0,
    }
}

#[test]
fn test_handler_noop_defaults() {
    struct NoopHandler;
    impl AssessmentEventHandler for NoopHandler {}

    let handler = NoopHandler;
    handler.on_stimulus_selected(&selected_event());
    handler.on_exploration_toggled(&ExplorationToggledEvent { enabled: true });
    handler.on_state_imported(&StateImportedEvent {
        questions_asked: 3,
        category_count: 11,
        confidence_level: 0.0,
    });
}

#[test]
fn test_empty_dispatcher_is_noop() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_stimulus_selected(&selected_event());
}

#[test]
fn test_dispatch_reaches_every_handler() {
    let a = Arc::new(CountingHandler::new());
    let b = Arc::new(CountingHandler::new());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(a.clone());
    dispatcher.register(b.clone());

    dispatcher.emit_stimulus_selected(&selected_event());
    dispatcher.emit_unknown_category(&UnknownCategoryEvent {
        category: "ultraviolet".into(),
    });

    for h in [&a, &b] {
        assert_eq!(h.selected.load(Ordering::Relaxed), 1);
        assert_eq!(h.unknown.load(Ordering::Relaxed), 1);
        assert_eq!(h.recorded.load(Ordering::Relaxed), 0);
    }
}

#[test]
fn test_panicking_handler_does_not_block_others() {
    struct PanicHandler;
    impl AssessmentEventHandler for PanicHandler {
        fn on_stimulus_selected(&self, _event: &StimulusSelectedEvent) {
            panic!("handler failure");
        }
    }

    let counter = Arc::new(CountingHandler::new());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(PanicHandler));
    dispatcher.register(counter.clone());

    dispatcher.emit_stimulus_selected(&selected_event());
    assert_eq!(counter.selected.load(Ordering::Relaxed), 1);
}
