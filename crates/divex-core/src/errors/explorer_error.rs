//! Top-level explorer errors.

use super::{AttributionError, ConfigError, DatasetError, DivexErrorCode};

/// Errors that can occur during one explorer invocation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Attribution error: {0}")]
    Attribution(#[from] AttributionError),
}

impl DivexErrorCode for ExplorerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Dataset(e) => e.error_code(),
            Self::Attribution(e) => e.error_code(),
        }
    }
}
