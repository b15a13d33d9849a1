//! DivexErrorCode trait for host-boundary conversion.

/// Trait for converting DivEx errors to stable error code strings.
/// Every error enum implements this so a host can report a structured
/// code alongside the message.
pub trait DivexErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted host error string: `[ERROR_CODE] message`.
    fn host_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const UNKNOWN_METRIC: &str = "UNKNOWN_METRIC";
pub const DATASET_ERROR: &str = "DATASET_ERROR";
pub const MISSING_COLUMN: &str = "MISSING_COLUMN";
pub const INVALID_LABEL: &str = "INVALID_LABEL";
pub const ATTRIBUTION_ERROR: &str = "ATTRIBUTION_ERROR";
