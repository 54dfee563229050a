//! # huesight-assessment
//!
//! Adaptive Bayesian colour-vision assessment.
//! Pipeline per question: select stimulus → (caller presents it) →
//! update the category's Beta posterior → re-estimate severity and
//! confidence. Reliability is advisory; the engine never stops itself.

pub mod beta;
pub mod catalog;
pub mod engine;
pub mod estimators;
pub mod model;
pub mod reliability;
pub mod report;
pub mod selection;
pub mod snapshot;
pub mod updater;

pub use catalog::{CategoryDefinition, StimulusCatalog};
pub use engine::AssessmentEngine;
pub use model::CategoryModel;
pub use reliability::ReliabilityAdvisor;
pub use selection::StimulusScore;
