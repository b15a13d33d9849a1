//! Tests for the DivEx error handling system.

use divex_core::errors::error_code::{self, DivexErrorCode};
use divex_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let config = ConfigError::ValidationFailed {
        field: "explorer.max_len".into(),
        message: "must be at least 1".into(),
    };
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);

    let metric = ConfigError::UnknownMetric("d_x".into());
    assert_eq!(metric.error_code(), error_code::UNKNOWN_METRIC);

    let missing = DatasetError::MissingColumn("class".into());
    assert_eq!(missing.error_code(), error_code::MISSING_COLUMN);

    let label = DatasetError::InvalidLabel {
        column: "predicted".into(),
        row: 3,
        value: "7".into(),
    };
    assert_eq!(label.error_code(), error_code::INVALID_LABEL);

    let mixed = DatasetError::MixedColumn("bin".into());
    assert_eq!(mixed.error_code(), error_code::DATASET_ERROR);

    let attribution = AttributionError::ItemsetNotFound("a=1".into());
    assert_eq!(attribution.error_code(), error_code::ATTRIBUTION_ERROR);
}

#[test]
fn test_from_conversions_keep_codes() {
    let err: ExplorerError = DatasetError::MissingColumn("predicted".into()).into();
    assert!(matches!(err, ExplorerError::Dataset(DatasetError::MissingColumn(_))));
    assert_eq!(err.error_code(), error_code::MISSING_COLUMN);

    let err: ExplorerError = ConfigError::UnknownMetric("d_x".into()).into();
    assert_eq!(err.error_code(), error_code::UNKNOWN_METRIC);
}

#[test]
fn test_host_string_format() {
    let err = DatasetError::MissingColumn("class".into());
    assert_eq!(
        err.host_string(),
        "[MISSING_COLUMN] Required column missing: class"
    );
}

#[test]
fn test_json_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: DatasetError = json_err.into();
    assert_eq!(err.error_code(), error_code::DATASET_ERROR);
    assert!(err.to_string().starts_with("Malformed table JSON"));
}
