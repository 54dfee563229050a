//! Beta posterior quantities used by selection, confidence, and reporting.
//!
//! The posterior Beta(α, β) is over the probability of a correct answer.
//! Closed-form moments drive the adaptive loop; the exact quantile-based
//! interval (via `statrs`) is only used for reporting.

use statrs::distribution::{Beta, ContinuousCDF};

/// Posterior mean α / (α + β). Falls back to 0.5 for degenerate input.
pub fn posterior_mean(alpha: f64, beta: f64) -> f64 {
    let sum = alpha + beta;
    if sum <= 0.0 || !sum.is_finite() {
        return 0.5;
    }
    (alpha / sum).clamp(0.0, 1.0)
}

/// Posterior variance αβ / ((α+β)²(α+β+1)).
pub fn posterior_variance(alpha: f64, beta: f64) -> f64 {
    let sum = alpha + beta;
    if sum <= 0.0 || !sum.is_finite() {
        return 0.25;
    }
    let var = (alpha * beta) / (sum * sum * (sum + 1.0));
    if var.is_finite() {
        var.max(0.0)
    } else {
        0.25
    }
}

pub fn posterior_std_dev(alpha: f64, beta: f64) -> f64 {
    posterior_variance(alpha, beta).sqrt()
}

/// Binary entropy (bits) of the posterior mean.
///
/// Degenerate parameters (α ≤ 0 or β ≤ 0) count as maximal uncertainty;
/// a mean of exactly 0 or 1 has zero entropy.
pub fn entropy(alpha: f64, beta: f64) -> f64 {
    if alpha <= 0.0 || beta <= 0.0 {
        return 1.0;
    }
    let p = alpha / (alpha + beta);
    if p <= 0.0 || p >= 1.0 || !p.is_finite() {
        return 0.0;
    }
    -p * p.log2() - (1.0 - p) * (1.0 - p).log2()
}

/// Approximate 95% credible-interval width: ±2σ, capped at 1.
pub fn interval_width(alpha: f64, beta: f64) -> f64 {
    (4.0 * posterior_std_dev(alpha, beta)).min(1.0)
}

/// Equal-tailed credible interval holding `level` of the posterior mass.
///
/// Returns `(low, high)` on the correct-answer probability. Invalid
/// parameters yield the uninformative `(0, 1)`.
pub fn credible_interval(alpha: f64, beta: f64, level: f64) -> (f64, f64) {
    if alpha <= 0.0 || beta <= 0.0 || !alpha.is_finite() || !beta.is_finite() {
        return (0.0, 1.0);
    }

    let tail = (1.0 - level.clamp(0.0, 1.0)) / 2.0;
    match Beta::new(alpha, beta) {
        Ok(dist) => {
            let low = dist.inverse_cdf(tail);
            let high = dist.inverse_cdf(1.0 - tail);
            let low = if low.is_finite() { low.clamp(0.0, 1.0) } else { 0.0 };
            let high = if high.is_finite() { high.clamp(0.0, 1.0) } else { 1.0 };
            (low, high)
        }
        Err(_) => (0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_prior_has_maximal_entropy() {
        assert!((entropy(2.0, 2.0) - 1.0).abs() < 1e-12);
        assert!((posterior_mean(2.0, 2.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_parameters_are_maximally_uncertain() {
        assert_eq!(entropy(0.0, 3.0), 1.0);
        assert_eq!(entropy(3.0, -1.0), 1.0);
    }

    #[test]
    fn entropy_falls_as_mean_moves_away_from_half() {
        assert!(entropy(10.0, 2.0) < entropy(4.0, 2.0));
        assert!((entropy(10.0, 2.0) - entropy(2.0, 10.0)).abs() < 1e-12);
    }

    #[test]
    fn beta_2_2_variance() {
        // 4 / (16 * 5)
        assert!((posterior_variance(2.0, 2.0) - 0.05).abs() < 1e-12);
        assert!((interval_width(2.0, 2.0) - 4.0 * 0.05f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn interval_width_is_capped() {
        assert_eq!(interval_width(0.01, 0.01), 1.0);
    }

    #[test]
    fn credible_interval_narrows_with_evidence() {
        let (l1, h1) = credible_interval(2.0, 2.0, 0.95);
        let (l2, h2) = credible_interval(20.0, 20.0, 0.95);
        assert!(h2 - l2 < h1 - l1);
        assert!(l1 < 0.5 && h1 > 0.5);
    }

    #[test]
    fn credible_interval_invalid_params() {
        assert_eq!(credible_interval(0.0, 2.0, 0.95), (0.0, 1.0));
    }
}
