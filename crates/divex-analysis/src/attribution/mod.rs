//! Per-item attribution of an itemset's divergence.

pub mod shapley;

pub use shapley::{item_contributions, ItemContribution};
