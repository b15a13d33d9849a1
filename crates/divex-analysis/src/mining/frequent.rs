//! Output of the enumerator: frequent itemsets keyed by canonical itemset.

use std::fmt;

use divex_core::types::collections::FxHashMap;

use crate::dataset::{Itemset, RowSet};

/// A frequent itemset with its exact coverage.
#[derive(Debug, Clone)]
pub struct FrequentItemset {
    pub itemset: Itemset,
    /// Sorted covered rows. Lives only as long as the invocation.
    pub rows: RowSet,
}

impl FrequentItemset {
    pub fn support_count(&self) -> u64 {
        self.rows.len() as u64
    }
}

/// Per-level search statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelStats {
    /// Itemset length of this level.
    pub length: usize,
    /// Candidates whose support was counted.
    pub candidates: usize,
    /// Candidates meeting the support threshold.
    pub retained: usize,
}

impl fmt::Display for LevelStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "level {}: {}/{} retained",
            self.length, self.retained, self.candidates
        )
    }
}

/// All frequent itemsets of one dataset, in level order and canonical order
/// within a level.
#[derive(Debug, Clone, Default)]
pub struct FrequentItemsets {
    n_rows: usize,
    itemsets: Vec<FrequentItemset>,
    index: FxHashMap<Itemset, usize>,
    levels: Vec<LevelStats>,
}

impl FrequentItemsets {
    pub(crate) fn new(n_rows: usize, itemsets: Vec<FrequentItemset>, levels: Vec<LevelStats>) -> Self {
        let index = itemsets
            .iter()
            .enumerate()
            .map(|(i, f)| (f.itemset.clone(), i))
            .collect();
        Self {
            n_rows,
            itemsets,
            index,
            levels,
        }
    }

    /// Dataset size the supports were computed against.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequentItemset> {
        self.itemsets.iter()
    }

    pub fn as_slice(&self) -> &[FrequentItemset] {
        &self.itemsets
    }

    pub fn get(&self, itemset: &Itemset) -> Option<&FrequentItemset> {
        self.index.get(itemset).map(|&i| &self.itemsets[i])
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.index.contains_key(itemset)
    }

    /// Support fraction of a frequent itemset.
    pub fn support(&self, itemset: &Itemset) -> Option<f64> {
        self.get(itemset)
            .map(|f| support_fraction(f.support_count(), self.n_rows))
    }

    pub fn levels(&self) -> &[LevelStats] {
        &self.levels
    }
}

/// `count / n`, with an empty dataset giving 0.
pub fn support_fraction(count: u64, n_rows: usize) -> f64 {
    if n_rows == 0 {
        0.0
    } else {
        count as f64 / n_rows as f64
    }
}
