//! End-to-end engine tests: cold start, estimator scenarios, reliability,
//! persistence round trips, and unknown categories.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use huesight_assessment::{AssessmentEngine, StimulusCatalog};
use huesight_core::config::AssessmentConfig;
use huesight_core::events::{
    AssessmentEventHandler, ReliabilityReachedEvent, ResponseRecordedEvent, StateImportedEvent,
    UnknownCategoryEvent,
};
use huesight_core::models::{
    AssessmentSnapshot, CategoryRecord, Color, Difficulty, SeverityLabel, StimulusPair,
};

fn seeded_engine(seed: u64) -> AssessmentEngine {
    let config = AssessmentConfig {
        seed: Some(seed),
        ..Default::default()
    };
    AssessmentEngine::new(StimulusCatalog::standard(), &config).unwrap()
}

fn first_stimulus(engine: &AssessmentEngine, category: &str) -> StimulusPair {
    engine
        .catalog()
        .stimuli_for(category)
        .next()
        .cloned()
        .unwrap()
}

fn answer(engine: &mut AssessmentEngine, category: &str, is_correct: bool, times: usize) {
    let pair = first_stimulus(engine, category);
    for _ in 0..times {
        engine.update_beliefs(&pair, is_correct, Duration::from_millis(1200));
    }
}

fn assert_conjugate(engine: &AssessmentEngine) {
    for c in engine.model() {
        assert_eq!(c.posterior_alpha, 2.0 + f64::from(c.correct_count), "{}", c.name);
        assert_eq!(c.posterior_beta, 2.0 + f64::from(c.incorrect_count), "{}", c.name);
    }
}

// ---- Scenarios ----

#[test]
fn cold_start_selects_heaviest_category() {
    let mut engine = seeded_engine(1);
    assert!(!engine.is_exploration_mode());
    let pair = engine.select_next();
    assert_eq!(pair.category, "red-green-primary");
}

#[test]
fn control_answers_leave_severity_uninformed() {
    let mut engine = seeded_engine(1);
    answer(&mut engine, "control", true, 10);
    assert_eq!(engine.severity_estimate(), 0.5);
    assert_eq!(engine.questions_asked(), 10);
    assert_eq!(engine.confidence_level(), 0.0);
}

#[test]
fn all_wrong_in_one_category_is_full_severity() {
    let mut engine = seeded_engine(1);
    answer(&mut engine, "red-green-primary", false, 8);
    assert_eq!(engine.severity_estimate(), 1.0);
    let report = engine.generate_report();
    assert_eq!(report.severity_label, SeverityLabel::Severe);
    assert!(report.recommendation.contains("eye care professional"));
    assert_conjugate(&engine);
}

#[test]
fn short_history_is_never_reliable() {
    let mut engine = seeded_engine(1);
    let categories: Vec<(String, CategoryRecord)> = engine
        .model()
        .iter()
        .map(|c| {
            (
                c.name.clone(),
                CategoryRecord {
                    correct_count: 500,
                    ..Default::default()
                },
            )
        })
        .collect();
    let pair = first_stimulus(&engine, "control");
    engine.import_state(Some(&AssessmentSnapshot {
        categories: Some(categories),
        ..Default::default()
    }));
    for _ in 0..7 {
        engine.update_beliefs(&pair, true, Duration::from_millis(500));
        assert!(engine.confidence_level() > 0.85);
        assert!(!engine.has_reliable_data());
    }
    engine.update_beliefs(&pair, true, Duration::from_millis(500));
    assert!(engine.has_reliable_data());
    assert!(engine.current_stats().is_reliable);
}

// ---- Loop behaviour ----

#[test]
fn exploitation_is_deterministic_for_fixed_state() {
    let mut engine = seeded_engine(3);
    answer(&mut engine, "red-brown", false, 2);
    answer(&mut engine, "pink-gray", true, 1);
    let first = engine.select_next();
    for _ in 0..10 {
        assert_eq!(engine.select_next(), first);
    }
}

#[test]
fn full_session_stays_in_range() {
    let mut engine = seeded_engine(9);
    for round in 0..25 {
        if round % 5 == 0 {
            engine.toggle_exploration_mode();
        }
        let pair = engine.select_next();
        let choice = if round % 3 == 0 { 0 } else { pair.correct_option };
        engine.update_beliefs(&pair, pair.is_correct_choice(choice), Duration::from_millis(800));
        assert!((0.0..=1.0).contains(&engine.severity_estimate()));
        assert!((0.0..=1.0).contains(&engine.confidence_level()));
        assert_conjugate(&engine);
    }
    assert!(engine.soft_limit_reached());
    let report = engine.generate_report();
    assert_eq!(report.total_questions, 25);
    assert_eq!(report.response_history.len(), 25);
    let breakdown_total: u32 = report.category_breakdown.iter().map(|b| b.total).sum();
    assert_eq!(breakdown_total, 25);
    assert!((report.average_response_time_ms - 800.0).abs() < 1e-9);
}

#[test]
fn report_breakdown_follows_model_order() {
    let mut engine = seeded_engine(1);
    answer(&mut engine, "control", true, 2);
    answer(&mut engine, "red-brown", false, 1);
    answer(&mut engine, "red-green-primary", true, 1);
    let report = engine.generate_report();
    let names: Vec<&str> = report
        .category_breakdown
        .iter()
        .map(|b| b.category.as_str())
        .collect();
    assert_eq!(names, vec!["red-green-primary", "red-brown", "control"]);
    assert_eq!(report.correct_answers(), 3);
    assert!((report.accuracy - 0.75).abs() < 1e-12);
    assert_eq!(report.breakdown_for("red-brown").unwrap().error_rate, 1.0);
}

// ---- Unknown categories ----

#[derive(Default)]
struct Counter {
    unknown: AtomicUsize,
    recorded: AtomicUsize,
    reliable: AtomicUsize,
    imported: AtomicUsize,
}

impl AssessmentEventHandler for Counter {
    fn on_unknown_category(&self, _event: &UnknownCategoryEvent) {
        self.unknown.fetch_add(1, Ordering::SeqCst);
    }
    fn on_response_recorded(&self, _event: &ResponseRecordedEvent) {
        self.recorded.fetch_add(1, Ordering::SeqCst);
    }
    fn on_reliability_reached(&self, _event: &ReliabilityReachedEvent) {
        self.reliable.fetch_add(1, Ordering::SeqCst);
    }
    fn on_state_imported(&self, _event: &StateImportedEvent) {
        self.imported.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn unknown_category_is_recorded_but_skipped() {
    let counter = Arc::new(Counter::default());
    let mut engine = seeded_engine(1).with_event_handler(counter.clone());
    let before = engine.model().to_vec();

    let foreign = StimulusPair {
        reference: Color::from_hex(0x123456),
        options: [Color::from_hex(0x654321), Color::from_hex(0x123456)],
        correct_option: 1,
        difficulty: Difficulty::new(3).unwrap(),
        category: "infrared".to_string(),
    };
    engine.update_beliefs(&foreign, false, Duration::from_millis(700));

    assert_eq!(engine.questions_asked(), 1);
    assert_eq!(engine.model().to_vec(), before);
    assert_eq!(engine.severity_estimate(), 0.5);
    assert_eq!(counter.unknown.load(Ordering::SeqCst), 1);
    assert_eq!(counter.recorded.load(Ordering::SeqCst), 1);
}

#[test]
fn reliability_event_fires_once() {
    let counter = Arc::new(Counter::default());
    let config = AssessmentConfig {
        min_questions: Some(1),
        confidence_threshold: Some(0.0),
        seed: Some(1),
        ..Default::default()
    };
    let mut engine = AssessmentEngine::new(StimulusCatalog::standard(), &config)
        .unwrap()
        .with_event_handler(counter.clone());
    answer(&mut engine, "control", true, 3);
    assert_eq!(counter.reliable.load(Ordering::SeqCst), 1);
}

// ---- Persistence ----

#[test]
fn export_import_round_trip() {
    let mut engine = seeded_engine(5);
    engine.toggle_exploration_mode();
    for round in 0..12 {
        let pair = engine.select_next();
        engine.update_beliefs(&pair, round % 4 != 0, Duration::from_millis(600 + round));
    }
    let snapshot = engine.export_state();

    let mut restored = seeded_engine(77);
    restored.import_state(Some(&snapshot));

    assert_eq!(restored.severity_estimate(), engine.severity_estimate());
    assert_eq!(restored.confidence_level(), engine.confidence_level());
    assert_eq!(restored.response_history(), engine.response_history());
    assert_eq!(restored.model().to_vec(), engine.model().to_vec());
    assert!(restored.is_exploration_mode());
    assert_eq!(restored.export_state(), snapshot);
}

#[test]
fn json_round_trip() {
    let mut engine = seeded_engine(5);
    answer(&mut engine, "red-brown", false, 3);
    answer(&mut engine, "control", true, 2);
    let pair = first_stimulus(&engine, "red-brown");
    engine.update_beliefs(&pair, true, Duration::from_micros(1500));
    let json = serde_json::to_string(&engine.export_state()).unwrap();

    let mut restored = seeded_engine(6);
    restored.import_json(&json);
    assert_eq!(restored.model().to_vec(), engine.model().to_vec());
    assert_eq!(restored.response_history(), engine.response_history());
    assert_eq!(restored.severity_estimate(), engine.severity_estimate());
    assert_eq!(
        restored.response_history().last().unwrap().response_time,
        Duration::from_micros(1500)
    );
}

#[test]
fn imported_history_drops_out_of_range_correct_option() {
    let mut engine = seeded_engine(5);
    answer(&mut engine, "red-brown", false, 3);
    let mut value = serde_json::to_value(engine.export_state()).unwrap();
    value["response_history"][1]["stimulus"]["correct_option"] = serde_json::json!(3);

    let mut restored = seeded_engine(6);
    restored.import_json(&value.to_string());
    assert_eq!(restored.questions_asked(), 2);
    assert!(restored
        .response_history()
        .iter()
        .all(|r| r.stimulus.correct_option <= 1));
}

#[test]
fn saturated_counts_do_not_panic() {
    let mut engine = seeded_engine(1);
    engine.import_json(
        r#"{
            "categories": [
                ["red-brown", {"correct_count": 4294967295, "incorrect_count": 1}],
                ["control", {"correct_count": 1, "incorrect_count": 4294967295}]
            ]
        }"#,
    );
    assert_eq!(engine.model().get("red-brown").unwrap().observations(), u32::MAX);

    for _ in 0..4 {
        let pair = engine.select_next();
        engine.update_beliefs(&pair, true, Duration::from_millis(400));
    }
    engine.toggle_exploration_mode();
    let pair = engine.select_next();
    engine.update_beliefs(&pair, false, Duration::from_millis(400));

    let red_brown = engine.model().get("red-brown").unwrap();
    assert_eq!(red_brown.correct_count, u32::MAX);
    let severity = engine.severity_estimate();
    assert!((0.0..=1.0).contains(&severity));
}

#[test]
fn bad_inner_category_field_keeps_category() {
    let mut engine = seeded_engine(1);
    engine.import_json(
        r#"{
            "categories": [
                ["red-brown", {"correct_count": "lots", "incorrect_count": 2}],
                ["control", {"weight": 0.8}]
            ]
        }"#,
    );
    assert_eq!(engine.model().len(), 2);
    let red_brown = engine.model().get("red-brown").unwrap();
    assert_eq!((red_brown.correct_count, red_brown.incorrect_count), (0, 2));
    assert_eq!(red_brown.posterior_beta, 4.0);
}

#[test]
fn import_none_is_a_no_op() {
    let counter = Arc::new(Counter::default());
    let mut engine = seeded_engine(1).with_event_handler(counter.clone());
    answer(&mut engine, "red-brown", false, 2);
    let before = engine.export_state();
    engine.import_state(None);
    assert_eq!(engine.export_state(), before);
    assert_eq!(counter.imported.load(Ordering::SeqCst), 0);
}

#[test]
fn partial_snapshot_defaults_missing_fields() {
    let mut engine = seeded_engine(1);
    answer(&mut engine, "red-brown", false, 4);
    engine.toggle_exploration_mode();

    engine.import_state(Some(&AssessmentSnapshot {
        severity_estimate: Some(0.3),
        ..Default::default()
    }));

    assert_eq!(engine.severity_estimate(), 0.3);
    assert_eq!(engine.confidence_level(), 0.0);
    assert_eq!(engine.questions_asked(), 0);
    assert!(!engine.is_exploration_mode());
    assert_eq!(engine.model().len(), 11);
    assert_eq!(engine.model().explored_count(), 0);
}

#[test]
fn category_list_replaces_model_in_snapshot_order() {
    let mut engine = seeded_engine(1);
    engine.import_state(Some(&AssessmentSnapshot {
        categories: Some(vec![
            ("control".to_string(), CategoryRecord::default()),
            (
                "red-brown".to_string(),
                CategoryRecord {
                    incorrect_count: 2,
                    ..Default::default()
                },
            ),
        ]),
        ..Default::default()
    }));

    let names: Vec<&str> = engine.model().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["control", "red-brown"]);
    let red_brown = engine.model().get("red-brown").unwrap();
    assert_eq!(red_brown.weight, 2.5);
    assert_eq!(red_brown.posterior_beta, 4.0);
    assert!(engine.model().get("red-green-primary").is_none());
}

#[test]
fn empty_category_list_restores_catalog_model() {
    let mut engine = seeded_engine(1);
    engine.import_state(Some(&AssessmentSnapshot {
        categories: Some(Vec::new()),
        ..Default::default()
    }));
    assert_eq!(engine.model().len(), 11);
    // Still able to select after the import.
    let pair = engine.select_next();
    assert_eq!(pair.category, "red-green-primary");
}

#[test]
fn malformed_json_is_ignored() {
    let mut engine = seeded_engine(1);
    answer(&mut engine, "red-brown", false, 2);
    let before = engine.export_state();
    engine.import_json("{not json");
    assert_eq!(engine.export_state(), before);
}

#[test]
fn json_with_bad_fields_keeps_good_ones() {
    let mut engine = seeded_engine(1);
    engine.import_json(
        r#"{
            "severity_estimate": "very",
            "confidence_level": 0.4,
            "exploration_mode": true,
            "categories": [["red-brown", {"correct_count": 1}], 17]
        }"#,
    );
    assert_eq!(engine.severity_estimate(), 0.5);
    assert_eq!(engine.confidence_level(), 0.4);
    assert!(engine.is_exploration_mode());
    assert_eq!(engine.model().len(), 1);
    assert_eq!(engine.model().get("red-brown").unwrap().posterior_alpha, 3.0);
}

#[test]
fn snapshot_priors_are_restored() {
    let mut engine = seeded_engine(1);
    engine.import_state(Some(&AssessmentSnapshot {
        prior_alpha: Some(1.0),
        prior_beta: Some(3.0),
        ..Default::default()
    }));
    let c = engine.model().get("control").unwrap();
    assert_eq!((c.posterior_alpha, c.posterior_beta), (1.0, 3.0));
    assert_eq!(engine.export_state().prior_alpha, Some(1.0));
}
