//! Beta posterior of an outcome rate, via the `statrs` crate.
//!
//! Prior: Beta(1, 1), uniform.
//! Posterior: Beta(1 + k, 1 + n - k) for k hits out of n trials.

use statrs::distribution::{Beta, ContinuousCDF};

/// Beta distribution posterior computation.
pub struct BetaPosterior;

impl BetaPosterior {
    /// Posterior parameters (alpha, beta) for `hits` out of `trials`.
    pub fn posterior_params(hits: u64, trials: u64) -> (f64, f64) {
        let k = hits as f64;
        let n = trials as f64;
        (1.0 + k, 1.0 + (n - k).max(0.0))
    }

    /// Posterior mean: alpha / (alpha + beta). Falls back to 0.5.
    pub fn posterior_mean(alpha: f64, beta: f64) -> f64 {
        let sum = alpha + beta;
        if sum <= 0.0 || !sum.is_finite() {
            return 0.5;
        }
        let mean = alpha / sum;
        if !mean.is_finite() {
            0.5
        } else {
            mean.clamp(0.0, 1.0)
        }
    }

    /// Posterior variance: alpha*beta / ((alpha+beta)^2 * (alpha+beta+1)).
    /// Falls back to 0.25, the variance ceiling of a unit interval.
    pub fn posterior_variance(alpha: f64, beta: f64) -> f64 {
        let sum = alpha + beta;
        if sum <= 0.0 || !sum.is_finite() {
            return 0.25;
        }
        let denom = sum * sum * (sum + 1.0);
        if denom <= 0.0 || !denom.is_finite() {
            return 0.25;
        }
        let var = (alpha * beta) / denom;
        if !var.is_finite() {
            0.25
        } else {
            var.max(0.0)
        }
    }

    /// Posterior (mean, variance) for `hits` out of `trials`.
    pub fn mean_variance(hits: u64, trials: u64) -> (f64, f64) {
        let (a, b) = Self::posterior_params(hits, trials);
        (Self::posterior_mean(a, b), Self::posterior_variance(a, b))
    }
}

/// Welch-style statistic between two Beta posteriors:
/// |mean_a - mean_b| / sqrt(var_a + var_b). Returns 0.0 when undefined.
pub fn welch_t(mean_a: f64, var_a: f64, mean_b: f64, var_b: f64) -> f64 {
    let pooled = var_a + var_b;
    if pooled <= f64::EPSILON || !pooled.is_finite() {
        return 0.0;
    }
    let t = (mean_a - mean_b).abs() / pooled.sqrt();
    if t.is_finite() {
        t
    } else {
        0.0
    }
}

/// Credible interval of a Beta distribution containing `level` mass.
/// Returns (low, high); invalid parameters give (0, 1).
pub fn credible_interval(alpha: f64, beta_param: f64, level: f64) -> (f64, f64) {
    if alpha <= 0.0 || beta_param <= 0.0 || !alpha.is_finite() || !beta_param.is_finite() {
        return (0.0, 1.0);
    }

    // Inverse CDF loses precision on very peaked posteriors
    if alpha > 1e6 || beta_param > 1e6 {
        let mean = alpha / (alpha + beta_param);
        let epsilon = 1e-6;
        return ((mean - epsilon).max(0.0), (mean + epsilon).min(1.0));
    }

    let tail = (1.0 - level) / 2.0;
    match Beta::new(alpha, beta_param) {
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
    fn test_uniform_prior() {
        let (a, b) = BetaPosterior::posterior_params(0, 0);
        assert_eq!((a, b), (1.0, 1.0));
        assert!((BetaPosterior::posterior_mean(a, b) - 0.5).abs() < 1e-12);
        // Var of Beta(1,1) = 1/12
        assert!((BetaPosterior::posterior_variance(a, b) - 1.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_posterior_with_evidence() {
        let (mean, var) = BetaPosterior::mean_variance(1, 3);
        // Beta(2, 3): mean 0.4, var 6 / (25 * 6) = 0.04
        assert!((mean - 0.4).abs() < 1e-12);
        assert!((var - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_welch_t_symmetric_and_zero_on_equal_means() {
        let t1 = welch_t(0.6, 0.01, 0.4, 0.03);
        let t2 = welch_t(0.4, 0.03, 0.6, 0.01);
        assert!((t1 - t2).abs() < 1e-12);
        assert!((t1 - 0.2 / 0.04f64.sqrt()).abs() < 1e-12);
        assert_eq!(welch_t(0.5, 0.01, 0.5, 0.01), 0.0);
    }

    #[test]
    fn test_welch_t_guards_degenerate_variance() {
        assert_eq!(welch_t(1.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(welch_t(1.0, f64::NAN, 0.0, 0.1), 0.0);
    }

    #[test]
    fn test_credible_interval_narrows_with_evidence() {
        let (l1, h1) = credible_interval(2.0, 2.0, 0.95);
        let (l2, h2) = credible_interval(20.0, 20.0, 0.95);
        assert!(h2 - l2 < h1 - l1);
    }

    #[test]
    fn test_credible_interval_invalid_params() {
        assert_eq!(credible_interval(0.0, 0.0, 0.95), (0.0, 1.0));
        let (low, high) = credible_interval(1e7, 1.0, 0.95);
        assert!(low.is_finite() && high.is_finite() && low <= high);
    }
}
