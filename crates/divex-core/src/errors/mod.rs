//! Error handling for DivEx.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod attribution_error;
pub mod config_error;
pub mod dataset_error;
pub mod error_code;
pub mod explorer_error;

pub use attribution_error::AttributionError;
pub use config_error::ConfigError;
pub use dataset_error::DatasetError;
pub use error_code::DivexErrorCode;
pub use explorer_error::ExplorerError;
