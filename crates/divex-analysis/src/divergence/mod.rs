//! Divergence scoring: metric rates, Beta-posterior significance, and the
//! per-itemset evaluator.

pub mod beta;
pub mod evaluator;
pub mod metric;
pub mod record;

pub use evaluator::{DivergenceEvaluator, ScoredItemsets};
pub use metric::{MetricScore, OutcomeRate};
pub use record::DivergenceRecord;
