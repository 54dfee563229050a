use serde::{Deserialize, Serialize};

use crate::constants::CONTROL_CATEGORY;

/// Running belief about one confusion category.
///
/// The posterior is Beta(`posterior_alpha`, `posterior_beta`) over the
/// probability of a correct answer. Conjugacy invariant:
/// `posterior_alpha == prior_alpha + correct_count` and
/// `posterior_beta == prior_beta + incorrect_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfusionCategory {
    pub name: String,
    /// Static diagnostic importance, fixed by the catalog.
    pub weight: f64,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub posterior_alpha: f64,
    pub posterior_beta: f64,
}

impl ConfusionCategory {
    /// A fresh category whose posterior equals the prior.
    pub fn new(name: impl Into<String>, weight: f64, prior_alpha: f64, prior_beta: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            correct_count: 0,
            incorrect_count: 0,
            posterior_alpha: prior_alpha,
            posterior_beta: prior_beta,
        }
    }

    /// Total answered stimuli in this category, saturating at `u32::MAX`.
    pub fn observations(&self) -> u32 {
        self.correct_count.saturating_add(self.incorrect_count)
    }

    pub fn is_observed(&self) -> bool {
        self.observations() > 0
    }

    /// Fraction of incorrect answers, `None` before any observation.
    pub fn error_rate(&self) -> Option<f64> {
        let total = self.observations();
        (total > 0).then(|| f64::from(self.incorrect_count) / f64::from(total))
    }

    /// Fraction of correct answers, `None` before any observation.
    pub fn accuracy(&self) -> Option<f64> {
        let total = self.observations();
        (total > 0).then(|| f64::from(self.correct_count) / f64::from(total))
    }

    /// The baseline category is excluded from severity and confidence.
    pub fn is_control(&self) -> bool {
        self.name == CONTROL_CATEGORY
    }
}
