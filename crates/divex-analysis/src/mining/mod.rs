//! Frequent itemset mining: level-wise search with anti-monotone pruning.

pub mod enumerator;
pub mod frequent;
pub mod tidlist;

pub use enumerator::ItemsetEnumerator;
pub use frequent::{FrequentItemset, FrequentItemsets, LevelStats};
