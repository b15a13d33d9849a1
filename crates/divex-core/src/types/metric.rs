//! Divergence metric catalog.
//!
//! Each metric names an outcome rate over the confusion matrix of a
//! subgroup. The configuration name is the divergence column (`d_fpr`),
//! the rate column drops the `d_` prefix (`fpr`), and the significance
//! column is `t_value_<short>` (`t_value_fp`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Outcome rate ranked by the explorer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Metric {
    /// False-positive rate: FP / (FP + TN).
    #[default]
    FalsePositiveRate,
    /// False-negative rate: FN / (FN + TP).
    FalseNegativeRate,
    /// True-positive rate (recall): TP / (TP + FN).
    TruePositiveRate,
    /// True-negative rate (specificity): TN / (TN + FP).
    TrueNegativeRate,
    /// Positive predictive value (precision): TP / (TP + FP).
    PositivePredictiveValue,
    /// Negative predictive value: TN / (TN + FN).
    NegativePredictiveValue,
    /// False discovery rate: FP / (TP + FP).
    FalseDiscoveryRate,
    /// False omission rate: FN / (TN + FN).
    FalseOmissionRate,
    /// Error rate: (FP + FN) / N.
    ErrorRate,
    /// Accuracy: (TP + TN) / N.
    Accuracy,
    /// Predicted-positive rate: (TP + FP) / N.
    PositiveRate,
    /// Predicted-negative rate: (TN + FN) / N.
    NegativeRate,
}

impl Metric {
    pub const ALL: [Metric; 12] = [
        Metric::FalsePositiveRate,
        Metric::FalseNegativeRate,
        Metric::TruePositiveRate,
        Metric::TrueNegativeRate,
        Metric::PositivePredictiveValue,
        Metric::NegativePredictiveValue,
        Metric::FalseDiscoveryRate,
        Metric::FalseOmissionRate,
        Metric::ErrorRate,
        Metric::Accuracy,
        Metric::PositiveRate,
        Metric::NegativeRate,
    ];

    /// Configuration name, also the divergence column name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FalsePositiveRate => "d_fpr",
            Self::FalseNegativeRate => "d_fnr",
            Self::TruePositiveRate => "d_tpr",
            Self::TrueNegativeRate => "d_tnr",
            Self::PositivePredictiveValue => "d_ppv",
            Self::NegativePredictiveValue => "d_npv",
            Self::FalseDiscoveryRate => "d_fdr",
            Self::FalseOmissionRate => "d_for",
            Self::ErrorRate => "d_error",
            Self::Accuracy => "d_accuracy",
            Self::PositiveRate => "d_posr",
            Self::NegativeRate => "d_negr",
        }
    }

    /// Rate column name.
    pub fn rate_name(&self) -> &'static str {
        &self.name()[2..]
    }

    /// Significance column name.
    pub fn t_value_name(&self) -> &'static str {
        match self {
            Self::FalsePositiveRate => "t_value_fp",
            Self::FalseNegativeRate => "t_value_fn",
            Self::TruePositiveRate => "t_value_tp",
            Self::TrueNegativeRate => "t_value_tn",
            Self::PositivePredictiveValue => "t_value_ppv",
            Self::NegativePredictiveValue => "t_value_npv",
            Self::FalseDiscoveryRate => "t_value_fdr",
            Self::FalseOmissionRate => "t_value_for",
            Self::ErrorRate => "t_value_error",
            Self::Accuracy => "t_value_accuracy",
            Self::PositiveRate => "t_value_posr",
            Self::NegativeRate => "t_value_negr",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == trimmed)
            .ok_or_else(|| ConfigError::UnknownMetric(trimmed.to_string()))
    }
}

impl TryFrom<String> for Metric {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Metric> for String {
    fn from(metric: Metric) -> Self {
        metric.name().to_string()
    }
}
