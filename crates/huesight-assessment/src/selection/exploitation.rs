//! Information-gain selection over the Beta-Bernoulli model.
//!
//! For a category with posterior Beta(α, β) and p = α/(α+β):
//!
//! ```text
//! E[H'] = p·H(α+1, β) + (1−p)·H(α, β+1)
//! gain  = weight · (H(α, β) − E[H'])
//! score = gain + bonus(observations)
//! ```
//!
//! The bonus offsets the cold start: under a symmetric prior the gain of an
//! untested category is tiny even though nothing is known about it.

use huesight_core::constants::{OBSERVED_BONUS_BASE, OBSERVED_BONUS_DECAY, UNTESTED_BONUS};
use huesight_core::models::{ConfusionCategory, StimulusPair};

use super::StimulusScore;
use crate::beta;
use crate::catalog::StimulusCatalog;
use crate::model::CategoryModel;

/// Weighted expected entropy reduction from one more answer.
pub fn information_gain(category: &ConfusionCategory) -> f64 {
    let (alpha, beta) = (category.posterior_alpha, category.posterior_beta);
    let current = beta::entropy(alpha, beta);
    let p_correct = beta::posterior_mean(alpha, beta);
    let expected = p_correct * beta::entropy(alpha + 1.0, beta)
        + (1.0 - p_correct) * beta::entropy(alpha, beta + 1.0);
    category.weight * (current - expected)
}

/// 0.5 for an untested category, then 0.2 decaying by 0.05 per observation
/// (zero from the fourth observation on).
pub fn exploration_bonus(observations: u32) -> f64 {
    if observations == 0 {
        UNTESTED_BONUS
    } else {
        (OBSERVED_BONUS_BASE - OBSERVED_BONUS_DECAY * f64::from(observations)).max(0.0)
    }
}

/// Score every catalog stimulus, in catalog order.
///
/// A stimulus whose category is missing from the model scores zero.
pub fn score_stimuli(model: &CategoryModel, catalog: &StimulusCatalog) -> Vec<StimulusScore> {
    catalog
        .stimuli()
        .iter()
        .enumerate()
        .map(|(index, pair)| {
            let (gain, bonus) = model
                .get(&pair.category)
                .map(|c| (information_gain(c), exploration_bonus(c.observations())))
                .unwrap_or((0.0, 0.0));
            StimulusScore {
                index,
                category: pair.category.clone(),
                information_gain: gain,
                exploration_bonus: bonus,
                score: gain + bonus,
            }
        })
        .collect()
}

/// The stimulus with the strictly greatest score; the first one wins ties.
///
/// Scores depend only on the stimulus's category, so they are computed
/// once per category.
pub fn select<'a>(model: &CategoryModel, catalog: &'a StimulusCatalog) -> (&'a StimulusPair, f64) {
    let category_scores: Vec<(&str, f64)> = model
        .iter()
        .map(|c| {
            (
                c.name.as_str(),
                information_gain(c) + exploration_bonus(c.observations()),
            )
        })
        .collect();
    let score_of = |name: &str| {
        category_scores
            .iter()
            .find(|(n, _)| *n == name)
            .map_or(0.0, |&(_, s)| s)
    };

    let stimuli = catalog.stimuli();
    let mut best = (&stimuli[0], f64::NEG_INFINITY);
    for pair in stimuli {
        let score = score_of(&pair.category);
        if score > best.1 {
            best = (pair, score);
        }
    }

    tracing::debug!(category = %best.0.category, score = best.1, "exploitation selection");
    best
}
