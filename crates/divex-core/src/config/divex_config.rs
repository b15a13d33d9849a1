//! Top-level DivEx configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ExplorerConfig;
use crate::errors::ConfigError;

/// Project config file name, looked up in the root passed to `load`.
pub const PROJECT_CONFIG_FILE: &str = "divex.toml";

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`DIVEX_*`)
/// 3. Project config (`divex.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DivexConfig {
    pub explorer: ExplorerConfig,
}

/// Override arguments supplied by the host, e.g. operator setup parameters.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub min_support: Option<f64>,
    pub max_len: Option<usize>,
    pub metric: Option<String>,
    pub ignore_cols: Option<Vec<String>>,
    pub th_redundancy: Option<f64>,
    pub top_k: Option<usize>,
    pub min_count: Option<u64>,
}

impl DivexConfig {
    /// Load configuration with layered resolution, then validate.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        config.explorer.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut DivexConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: DivexConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut DivexConfig, other: &DivexConfig) {
        let (base, other) = (&mut base.explorer, &other.explorer);
        if other.min_support.is_some() {
            base.min_support = other.min_support;
        }
        if other.max_len.is_some() {
            base.max_len = other.max_len;
        }
        if other.metric.is_some() {
            base.metric = other.metric.clone();
        }
        if !other.ignore_cols.is_empty() {
            base.ignore_cols = other.ignore_cols.clone();
        }
        if other.th_redundancy.is_some() {
            base.th_redundancy = other.th_redundancy;
        }
        if other.top_k.is_some() {
            base.top_k = other.top_k;
        }
        if other.min_count.is_some() {
            base.min_count = other.min_count;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `DIVEX_MIN_SUPPORT`, `DIVEX_MAX_LEN`, etc.
    fn apply_env_overrides(config: &mut DivexConfig) {
        let explorer = &mut config.explorer;
        if let Some(v) = env_parse::<f64>("DIVEX_MIN_SUPPORT") {
            explorer.min_support = Some(v);
        }
        if let Some(v) = env_parse::<usize>("DIVEX_MAX_LEN") {
            explorer.max_len = Some(v);
        }
        if let Ok(val) = std::env::var("DIVEX_METRIC") {
            explorer.metric = Some(val);
        }
        if let Ok(val) = std::env::var("DIVEX_IGNORE_COLS") {
            explorer.ignore_cols = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(v) = env_parse::<f64>("DIVEX_TH_REDUNDANCY") {
            explorer.th_redundancy = Some(v);
        }
        if let Some(v) = env_parse::<usize>("DIVEX_TOP_K") {
            explorer.top_k = Some(v);
        }
        if let Some(v) = env_parse::<u64>("DIVEX_MIN_COUNT") {
            explorer.min_count = Some(v);
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut DivexConfig, overrides: &ConfigOverrides) {
        let explorer = &mut config.explorer;
        if let Some(v) = overrides.min_support {
            explorer.min_support = Some(v);
        }
        if let Some(v) = overrides.max_len {
            explorer.max_len = Some(v);
        }
        if let Some(ref v) = overrides.metric {
            explorer.metric = Some(v.clone());
        }
        if let Some(ref v) = overrides.ignore_cols {
            explorer.ignore_cols = v.clone();
        }
        if let Some(v) = overrides.th_redundancy {
            explorer.th_redundancy = Some(v);
        }
        if let Some(v) = overrides.top_k {
            explorer.top_k = Some(v);
        }
        if let Some(v) = overrides.min_count {
            explorer.min_count = Some(v);
        }
    }
}

/// Read and parse an env var. Unparsable values are skipped with a warning.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let val = std::env::var(key).ok()?;
    match val.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            ::tracing::warn!(key, value = %val, "ignoring unparsable environment override");
            None
        }
    }
}
