//! One scored subgroup.

use serde::Serialize;

use super::metric::MetricScore;
use crate::dataset::{ConfusionCounts, Itemset};

/// Divergence record of one itemset. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivergenceRecord {
    #[serde(skip)]
    pub itemset: Itemset,
    /// Rendered conjunction, e.g. `age=1, region=A`.
    #[serde(rename = "itemsets")]
    pub label: String,
    pub support: f64,
    pub support_count: u64,
    pub counts: ConfusionCounts,
    pub rate: Option<f64>,
    pub divergence: Option<f64>,
    pub significance: f64,
    pub credible_interval: Option<(f64, f64)>,
}

impl DivergenceRecord {
    pub fn new(
        itemset: Itemset,
        label: String,
        support: f64,
        counts: ConfusionCounts,
        score: MetricScore,
    ) -> Self {
        Self {
            itemset,
            label,
            support,
            support_count: counts.total(),
            counts,
            rate: score.rate,
            divergence: score.divergence,
            significance: score.significance,
            credible_interval: score.credible_interval,
        }
    }
}
