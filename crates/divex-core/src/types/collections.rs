//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec sized for itemsets (max_len rarely exceeds 4).
pub type SmallVec4<T> = SmallVec<[T; 4]>;
