//! Aggregate estimators recomputed after every response.

pub mod confidence;
pub mod severity;

pub use confidence::{category_confidence, estimate_confidence};
pub use severity::estimate_severity;
