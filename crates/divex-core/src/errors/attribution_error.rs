//! Shapley attribution errors.

use super::error_code::{self, DivexErrorCode};

/// Errors that can occur while attributing divergence to single items.
#[derive(Debug, thiserror::Error)]
pub enum AttributionError {
    #[error("Itemset not found among frequent itemsets: {0}")]
    ItemsetNotFound(String),

    #[error("Subset {0} is not available for attribution")]
    MissingSubset(String),

    #[error("Divergence undefined for {0}")]
    UndefinedDivergence(String),
}

impl DivexErrorCode for AttributionError {
    fn error_code(&self) -> &'static str {
        error_code::ATTRIBUTION_ERROR
    }
}
