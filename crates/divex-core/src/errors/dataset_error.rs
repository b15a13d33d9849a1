//! Dataset errors raised while validating an input table.

use super::error_code::{self, DivexErrorCode};

/// Errors that can occur while encoding an input table into a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Required column missing: {0}")]
    MissingColumn(String),

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("Column {column} has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid label {value} in column {column} at row {row}: expected 0 or 1")]
    InvalidLabel {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Feature column {0} mixes integer and text cells")]
    MixedColumn(String),

    #[error("Malformed table JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DivexErrorCode for DatasetError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingColumn(_) => error_code::MISSING_COLUMN,
            Self::InvalidLabel { .. } => error_code::INVALID_LABEL,
            _ => error_code::DATASET_ERROR,
        }
    }
}
