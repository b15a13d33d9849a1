//! Divergence-based subgroup discovery.
//!
//! Pipeline: input table → encoded dataset → frequent itemsets →
//! scored itemsets → ranked, redundancy-filtered result table.

pub mod attribution;
pub mod dataset;
pub mod divergence;
pub mod explorer;
pub mod mining;
pub mod ranking;

pub use dataset::{Dataset, InputTable};
pub use explorer::{DivExplorer, Exploration, ExplorationDiagnostics};
pub use ranking::ResultTable;
