//! Outcome rates over confusion counts and the per-subgroup score.
//!
//! A metric is a pure function of (subgroup counts, global counts):
//! the subgroup rate, its divergence from the global rate, and a
//! significance statistic.

use divex_core::types::Metric;
use serde::Serialize;

use super::beta::{self, BetaPosterior};
use crate::dataset::ConfusionCounts;

/// Credible level of the interval reported for each subgroup rate.
pub const CREDIBLE_LEVEL: f64 = 0.95;

/// Rate definition over confusion counts.
pub trait OutcomeRate {
    /// (hits, trials) of the rate for `counts`.
    fn fraction(&self, counts: &ConfusionCounts) -> (u64, u64);

    /// Rate value, `None` when fewer than `min_count` trials.
    fn rate(&self, counts: &ConfusionCounts, min_count: u64) -> Option<f64> {
        let (hits, trials) = self.fraction(counts);
        if trials == 0 || trials < min_count {
            None
        } else {
            Some(hits as f64 / trials as f64)
        }
    }

    /// Score a subgroup against the global baseline.
    fn score(&self, coverage: &ConfusionCounts, global: &ConfusionCounts, min_count: u64) -> MetricScore {
        let rate = self.rate(coverage, min_count);
        let global_rate = self.rate(global, 1);
        let divergence = match (rate, global_rate) {
            (Some(r), Some(g)) => Some(r - g),
            _ => None,
        };

        let (hits, trials) = self.fraction(coverage);
        let (alpha, beta_param) = BetaPosterior::posterior_params(hits, trials);
        let significance = match divergence {
            Some(_) => {
                let (g_hits, g_trials) = self.fraction(global);
                let (g_mean, g_var) = BetaPosterior::mean_variance(g_hits, g_trials);
                beta::welch_t(
                    BetaPosterior::posterior_mean(alpha, beta_param),
                    BetaPosterior::posterior_variance(alpha, beta_param),
                    g_mean,
                    g_var,
                )
            }
            None => 0.0,
        };
        let credible_interval = rate.map(|_| beta::credible_interval(alpha, beta_param, CREDIBLE_LEVEL));

        MetricScore {
            rate,
            divergence,
            significance,
            credible_interval,
        }
    }
}

impl OutcomeRate for Metric {
    fn fraction(&self, c: &ConfusionCounts) -> (u64, u64) {
        let n = c.total();
        match self {
            Metric::FalsePositiveRate => (c.false_pos, c.actual_negatives()),
            Metric::FalseNegativeRate => (c.false_neg, c.actual_positives()),
            Metric::TruePositiveRate => (c.true_pos, c.actual_positives()),
            Metric::TrueNegativeRate => (c.true_neg, c.actual_negatives()),
            Metric::PositivePredictiveValue => (c.true_pos, c.predicted_positives()),
            Metric::NegativePredictiveValue => (c.true_neg, c.predicted_negatives()),
            Metric::FalseDiscoveryRate => (c.false_pos, c.predicted_positives()),
            Metric::FalseOmissionRate => (c.false_neg, c.predicted_negatives()),
            Metric::ErrorRate => (c.false_pos + c.false_neg, n),
            Metric::Accuracy => (c.true_pos + c.true_neg, n),
            Metric::PositiveRate => (c.predicted_positives(), n),
            Metric::NegativeRate => (c.predicted_negatives(), n),
        }
    }
}

/// Score of one subgroup under one metric. Every field is finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricScore {
    /// Subgroup rate; `None` when its denominator is below the minimum count.
    pub rate: Option<f64>,
    /// Subgroup rate minus global rate; `None` when either is undefined.
    pub divergence: Option<f64>,
    /// Welch-style t-value between the Beta posteriors; 0.0 when undefined.
    pub significance: f64,
    /// 95% credible interval of the subgroup rate.
    pub credible_interval: Option<(f64, f64)>,
}
