//! Conjugate Beta-Bernoulli update for one observed response.

use huesight_core::models::ConfusionCategory;

/// Fold one response into the category's counts and posterior.
///
/// A correct answer is a Bernoulli success: α and the correct count move
/// together, as do β and the incorrect count, so conjugacy is preserved.
pub fn apply_response(category: &mut ConfusionCategory, is_correct: bool) {
    if is_correct {
        category.correct_count = category.correct_count.saturating_add(1);
        category.posterior_alpha += 1.0;
    } else {
        category.incorrect_count = category.incorrect_count.saturating_add(1);
        category.posterior_beta += 1.0;
    }
}
