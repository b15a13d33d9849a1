//! Configuration system for DivEx.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod divex_config;
pub mod explorer_config;

pub use divex_config::{ConfigOverrides, DivexConfig};
pub use explorer_config::ExplorerConfig;
