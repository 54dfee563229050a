//! AssessmentEngine: owns one session's state and runs the
//! select → respond → update loop.
//!
//! Every operation runs to completion synchronously. Nothing here returns
//! an error once the engine is built: unknown categories are skipped,
//! degenerate posteriors read as maximal uncertainty, and partial
//! snapshots fall back field by field.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use huesight_core::config::AssessmentConfig;
use huesight_core::errors::CatalogError;
use huesight_core::events::{
    AssessmentEventHandler, EventDispatcher, ExplorationToggledEvent, ReliabilityReachedEvent,
    ResponseRecordedEvent, StateImportedEvent, StimulusSelectedEvent, UnknownCategoryEvent,
};
use huesight_core::models::{
    AssessmentReport, AssessmentSnapshot, AssessmentStats, ResponseRecord, SelectionMode,
    StimulusPair,
};
use huesight_core::traits::RandomSource;

use crate::catalog::StimulusCatalog;
use crate::estimators::{estimate_confidence, estimate_severity};
use crate::model::CategoryModel;
use crate::reliability::ReliabilityAdvisor;
use crate::selection::{self, StimulusScore};
use crate::{report, snapshot, updater};

/// Initial severity and confidence of a fresh session.
const INITIAL_SEVERITY: f64 = huesight_core::constants::UNINFORMED_SEVERITY;
const INITIAL_CONFIDENCE: f64 = 0.0;

pub struct AssessmentEngine {
    catalog: StimulusCatalog,
    model: CategoryModel,
    history: Vec<ResponseRecord>,
    severity_estimate: f64,
    confidence_level: f64,
    exploration_mode: bool,
    /// Priors from configuration; restored when a snapshot omits its own.
    configured_priors: (f64, f64),
    /// Priors of the current session.
    priors: (f64, f64),
    advisor: ReliabilityAdvisor,
    rng: Box<dyn RandomSource>,
    events: EventDispatcher,
}

impl AssessmentEngine {
    /// Fresh session over `catalog`: zero counts, posterior = prior.
    ///
    /// `config.catalog_path` is ignored here; see [`Self::from_config`].
    pub fn new(catalog: StimulusCatalog, config: &AssessmentConfig) -> Result<Self, CatalogError> {
        if catalog.categories().is_empty() {
            return Err(CatalogError::NoCategories);
        }
        if catalog.is_empty() {
            return Err(CatalogError::NoStimuli);
        }

        Ok(Self::build(catalog, config))
    }

    /// Load the catalog named by `config.catalog_path`, or the standard one.
    pub fn from_config(config: &AssessmentConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.catalog_path {
            Some(path) => StimulusCatalog::load(path)?,
            None => StimulusCatalog::standard(),
        };
        Self::new(catalog, config)
    }

    /// Standard catalog, default configuration.
    pub fn with_defaults() -> Self {
        Self::build(StimulusCatalog::standard(), &AssessmentConfig::default())
    }

    fn build(catalog: StimulusCatalog, config: &AssessmentConfig) -> Self {
        let priors = (config.effective_prior_alpha(), config.effective_prior_beta());
        let rng: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(StdRng::from_entropy()),
        };

        Self {
            model: CategoryModel::from_catalog(&catalog, priors.0, priors.1),
            catalog,
            history: Vec::new(),
            severity_estimate: INITIAL_SEVERITY,
            confidence_level: INITIAL_CONFIDENCE,
            exploration_mode: false,
            configured_priors: priors,
            priors,
            advisor: ReliabilityAdvisor::from_config(config),
            rng,
            events: EventDispatcher::new(),
        }
    }

    /// Replace the exploration-mode random source.
    pub fn with_random_source(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    /// Register an observer for engine events.
    pub fn with_event_handler(mut self, handler: Arc<dyn AssessmentEventHandler>) -> Self {
        self.events.register(handler);
        self
    }

    // ---- Selection ----

    /// Choose the next stimulus under the current selection mode.
    pub fn select_next(&mut self) -> StimulusPair {
        let mode = self.selection_mode();
        let (pair, score) = match mode {
            SelectionMode::Exploration => (
                selection::exploration::select(&self.model, &self.catalog, self.rng.as_mut()),
                None,
            ),
            SelectionMode::Exploitation => {
                let (pair, score) = selection::exploitation::select(&self.model, &self.catalog);
                (pair, Some(score))
            }
        };
        let pair = pair.clone();

        let observations = self
            .model
            .get(&pair.category)
            .map_or(0, |c| c.observations());
        tracing::debug!(
            category = %pair.category,
            %mode,
            observations,
            "stimulus selected"
        );
        self.events.emit_stimulus_selected(&StimulusSelectedEvent {
            category: pair.category.clone(),
            mode,
            score,
            observations,
        });
        pair
    }

    /// Flip between exploration and exploitation. Touches nothing else.
    pub fn toggle_exploration_mode(&mut self) {
        self.exploration_mode = !self.exploration_mode;
        tracing::info!(mode = %self.selection_mode(), "selection mode toggled");
        self.events.emit_exploration_toggled(&ExplorationToggledEvent {
            enabled: self.exploration_mode,
        });
    }

    /// Exploitation scores of every catalog stimulus, for diagnostics.
    pub fn score_stimuli(&self) -> Vec<StimulusScore> {
        selection::score_stimuli(&self.model, &self.catalog)
    }

    // ---- Belief updates ----

    /// Record a response and re-estimate severity and confidence.
    ///
    /// A pair whose category is not in the model is kept in the history
    /// but changes no posterior.
    pub fn update_beliefs(&mut self, pair: &StimulusPair, is_correct: bool, response_time: Duration) {
        let was_reliable = self.has_reliable_data();
        self.history
            .push(ResponseRecord::new(pair.clone(), is_correct, response_time));

        match self.model.get_mut(&pair.category) {
            Some(category) => updater::apply_response(category, is_correct),
            None => {
                tracing::warn!(category = %pair.category, "response for unknown category, posterior unchanged");
                self.events.emit_unknown_category(&UnknownCategoryEvent {
                    category: pair.category.clone(),
                });
            }
        }

        self.severity_estimate = estimate_severity(&self.model);
        self.confidence_level = estimate_confidence(&self.model, self.history.len());

        tracing::debug!(
            category = %pair.category,
            is_correct,
            questions = self.history.len(),
            severity = self.severity_estimate,
            confidence = self.confidence_level,
            "beliefs updated"
        );
        self.events.emit_response_recorded(&ResponseRecordedEvent {
            category: pair.category.clone(),
            is_correct,
            response_time_ms: u64::try_from(response_time.as_millis()).unwrap_or(u64::MAX),
            questions_asked: self.history.len(),
            severity_estimate: self.severity_estimate,
            confidence_level: self.confidence_level,
        });

        if !was_reliable && self.has_reliable_data() {
            tracing::info!(
                questions = self.history.len(),
                confidence = self.confidence_level,
                "reliable data reached"
            );
            self.events.emit_reliability_reached(&ReliabilityReachedEvent {
                questions_asked: self.history.len(),
                confidence_level: self.confidence_level,
            });
        }
    }

    // ---- Queries ----

    pub fn has_reliable_data(&self) -> bool {
        self.advisor
            .has_reliable_data(self.history.len(), self.confidence_level)
    }

    /// Advisory: the session has reached its soft ceiling.
    pub fn soft_limit_reached(&self) -> bool {
        self.advisor.soft_limit_reached(self.history.len())
    }

    pub fn current_stats(&self) -> AssessmentStats {
        AssessmentStats {
            questions_asked: self.history.len(),
            confidence_level: self.confidence_level,
            confidence_threshold: self.advisor.confidence_threshold,
            severity_estimate: self.severity_estimate,
            is_reliable: self.has_reliable_data(),
            exploration_mode: self.exploration_mode,
            categories_explored: self.model.explored_count(),
            total_categories: self.model.len(),
        }
    }

    pub fn generate_report(&self) -> AssessmentReport {
        report::build_report(
            &self.model,
            &self.history,
            self.severity_estimate,
            self.confidence_level,
        )
    }

    pub fn catalog(&self) -> &StimulusCatalog {
        &self.catalog
    }

    pub fn model(&self) -> &CategoryModel {
        &self.model
    }

    pub fn response_history(&self) -> &[ResponseRecord] {
        &self.history
    }

    pub fn questions_asked(&self) -> usize {
        self.history.len()
    }

    pub fn severity_estimate(&self) -> f64 {
        self.severity_estimate
    }

    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    pub fn is_exploration_mode(&self) -> bool {
        self.exploration_mode
    }

    pub fn selection_mode(&self) -> SelectionMode {
        SelectionMode::from_exploration_flag(self.exploration_mode)
    }

    pub fn advisor(&self) -> &ReliabilityAdvisor {
        &self.advisor
    }

    // ---- Persistence ----

    /// Snapshot of every mutable field.
    pub fn export_state(&self) -> AssessmentSnapshot {
        AssessmentSnapshot {
            response_history: Some(self.history.clone()),
            confidence_level: Some(self.confidence_level),
            severity_estimate: Some(self.severity_estimate),
            exploration_mode: Some(self.exploration_mode),
            categories: Some(snapshot::category_records(&self.model)),
            prior_alpha: Some(self.priors.0),
            prior_beta: Some(self.priors.1),
        }
    }

    /// Restore from a snapshot. `None` leaves the state untouched.
    ///
    /// Each absent field resets to its initial value. A present, non-empty
    /// category list replaces the model entirely, in snapshot order.
    pub fn import_state(&mut self, snapshot: Option<&AssessmentSnapshot>) {
        let Some(snap) = snapshot else {
            return;
        };

        self.priors = (
            snap.prior_alpha.unwrap_or(self.configured_priors.0),
            snap.prior_beta.unwrap_or(self.configured_priors.1),
        );
        self.history = snap.response_history.clone().unwrap_or_default();
        self.confidence_level = snap.confidence_level.unwrap_or(INITIAL_CONFIDENCE);
        self.severity_estimate = snap.severity_estimate.unwrap_or(INITIAL_SEVERITY);
        self.exploration_mode = snap.exploration_mode.unwrap_or(false);
        self.model = match snap.categories.as_deref() {
            Some(records) if !records.is_empty() => {
                snapshot::restore_model(records, &self.catalog, self.priors.0, self.priors.1)
            }
            _ => CategoryModel::from_catalog(&self.catalog, self.priors.0, self.priors.1),
        };

        tracing::info!(
            questions = self.history.len(),
            categories = self.model.len(),
            "assessment state imported"
        );
        self.events.emit_state_imported(&StateImportedEvent {
            questions_asked: self.history.len(),
            category_count: self.model.len(),
            confidence_level: self.confidence_level,
        });
    }

    /// Restore from snapshot JSON. Unparseable text is logged and ignored.
    pub fn import_json(&mut self, json: &str) {
        match serde_json::from_str::<serde_json::Value>(json) {
            Ok(value) => {
                let snap = AssessmentSnapshot::from_json_value(&value);
                self.import_state(Some(&snap));
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unparseable snapshot JSON");
            }
        }
    }

    /// Start over: empty history, fresh posteriors, exploitation mode.
    pub fn reset(&mut self) {
        self.import_state(Some(&AssessmentSnapshot::default()));
    }
}

impl std::fmt::Debug for AssessmentEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssessmentEngine")
            .field("categories", &self.model.len())
            .field("questions_asked", &self.history.len())
            .field("severity_estimate", &self.severity_estimate)
            .field("confidence_level", &self.confidence_level)
            .field("exploration_mode", &self.exploration_mode)
            .field("events", &self.events)
            .finish()
    }
}
