//! Host-facing operator contract: configure once, evaluate per batch.

use crate::errors::ConfigError;

/// A table-in, table-out operator registered with a host environment.
///
/// The host calls `configure` once with the fixed options and then calls
/// `evaluate` for every batch. Implementations keep no state between
/// `evaluate` calls besides the configuration, so a configured operator can
/// be shared across threads.
pub trait TableOperator: Send + Sync + Sized {
    type Config;
    type Input;
    type Output;
    type Error: std::error::Error;

    /// Validate and freeze the configuration.
    fn configure(config: &Self::Config) -> Result<Self, ConfigError>;

    /// Operator name as registered with the host.
    fn name(&self) -> &'static str;

    /// Process one input table.
    fn evaluate(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}
