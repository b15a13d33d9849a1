//! Core types, traits, errors, config, and tracing for DivEx.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;
