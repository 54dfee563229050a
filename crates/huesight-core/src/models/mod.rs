//! Domain models shared across the workspace.

pub mod category;
pub mod color;
pub mod report;
pub mod response;
pub mod selection_mode;
pub mod snapshot;
pub mod stats;
pub mod stimulus;

pub use category::ConfusionCategory;
pub use color::Color;
pub use report::{AssessmentReport, CategoryBreakdown, SeverityLabel};
pub use response::ResponseRecord;
pub use selection_mode::SelectionMode;
pub use snapshot::{AssessmentSnapshot, CategoryRecord};
pub use stats::AssessmentStats;
pub use stimulus::{Difficulty, StimulusPair};
