//! Item selection: which stimulus to present next.
//!
//! Exploration balances coverage across categories; exploitation asks
//! where one more answer is expected to remove the most uncertainty.

pub mod exploitation;
pub mod exploration;

use serde::{Deserialize, Serialize};

pub use exploitation::{exploration_bonus, information_gain, score_stimuli};

/// Exploitation-mode score of one catalog stimulus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StimulusScore {
    /// Position in the catalog.
    pub index: usize,
    pub category: String,
    pub information_gain: f64,
    pub exploration_bonus: f64,
    pub score: f64,
}
