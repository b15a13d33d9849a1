//! Configuration errors.

use super::error_code::{self, DivexErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),
}

impl DivexErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownMetric(_) => error_code::UNKNOWN_METRIC,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
