//! Ranking and top-K selection of divergence records.

pub mod order;
pub mod result_table;
pub mod topk;

pub use order::rank_order;
pub use result_table::ResultTable;
pub use topk::{Selection, TopKFilter};
