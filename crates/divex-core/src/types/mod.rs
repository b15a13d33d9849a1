//! Shared data types for DivEx.

pub mod collections;
pub mod metric;

pub use collections::{FxHashMap, FxHashSet};
pub use metric::Metric;
