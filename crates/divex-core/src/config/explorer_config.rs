//! Explorer configuration: mining, scoring, and ranking options.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::Metric;

/// Default minimum support fraction.
pub const DEFAULT_MIN_SUPPORT: f64 = 0.1;
/// Default maximum itemset length.
pub const DEFAULT_MAX_LEN: usize = 3;
/// Default minimum rate denominator for a defined rate.
pub const DEFAULT_MIN_COUNT: u64 = 1;

/// Options fixed once per explorer instance.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Minimum itemset coverage fraction, in (0, 1]. Default: 0.1.
    pub min_support: Option<f64>,
    /// Maximum items per itemset, ≥ 1. Default: 3.
    pub max_len: Option<usize>,
    /// Metric to compute and rank by. Default: `d_fpr`.
    pub metric: Option<String>,
    /// Columns excluded from candidate-item generation.
    #[serde(default)]
    pub ignore_cols: Vec<String>,
    /// Redundancy-collapse tolerance, in [0, 1]. Unset: any nesting is redundant.
    pub th_redundancy: Option<f64>,
    /// Result-table size cap. Unset: every record, sorted, unfiltered.
    pub top_k: Option<usize>,
    /// Minimum rate denominator for a subgroup rate to be defined. Default: 1.
    pub min_count: Option<u64>,
}

impl ExplorerConfig {
    /// Returns the effective minimum support, defaulting to 0.1.
    pub fn effective_min_support(&self) -> f64 {
        self.min_support.unwrap_or(DEFAULT_MIN_SUPPORT)
    }

    /// Returns the effective maximum itemset length, defaulting to 3.
    pub fn effective_max_len(&self) -> usize {
        self.max_len.unwrap_or(DEFAULT_MAX_LEN)
    }

    /// Returns the effective metric, defaulting to `d_fpr`.
    pub fn effective_metric(&self) -> Result<Metric, ConfigError> {
        match self.metric.as_deref() {
            Some(name) => name.parse(),
            None => Ok(Metric::default()),
        }
    }

    /// Returns the effective minimum rate denominator, defaulting to 1.
    pub fn effective_min_count(&self) -> u64 {
        self.min_count.unwrap_or(DEFAULT_MIN_COUNT)
    }

    /// Validate every option. Nothing is coerced.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(min_support) = self.min_support {
            if !(min_support > 0.0 && min_support <= 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "explorer.min_support".to_string(),
                    message: format!("must be in (0, 1], got {min_support}"),
                });
            }
        }
        if self.max_len == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "explorer.max_len".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        self.effective_metric()?;
        if let Some(th) = self.th_redundancy {
            if !(0.0..=1.0).contains(&th) {
                return Err(ConfigError::ValidationFailed {
                    field: "explorer.th_redundancy".to_string(),
                    message: format!("must be between 0.0 and 1.0, got {th}"),
                });
            }
        }
        if self.top_k == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "explorer.top_k".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.min_count == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "explorer.min_count".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
