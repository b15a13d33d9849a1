//! Level-wise frequent itemset enumeration.
//!
//! Level 1 counts every observed `column=value` item. Level n+1 extends each
//! retained level-n itemset with a retained single item from a later column,
//! so every itemset is generated exactly once, in canonical order. Coverage
//! is carried as a sorted row list and narrowed by intersection; an
//! extension below the threshold is dropped before it can be extended
//! (no superset of an infrequent itemset is frequent).

use rayon::prelude::*;
use tracing::debug;

use crate::dataset::{Dataset, Item, Itemset, RowSet};

use super::frequent::{FrequentItemset, FrequentItemsets, LevelStats};
use super::tidlist;

/// Frequent itemset enumerator for one (min_support, max_len) pair.
#[derive(Debug, Clone, Copy)]
pub struct ItemsetEnumerator {
    min_support: f64,
    max_len: usize,
}

impl ItemsetEnumerator {
    /// `min_support` in (0, 1] and `max_len ≥ 1` are validated by the
    /// configuration layer.
    pub fn new(min_support: f64, max_len: usize) -> Self {
        Self {
            min_support,
            max_len,
        }
    }

    /// Exact threshold test: `count / n >= min_support`.
    ///
    /// Compared as a fraction rather than against a rounded count so that
    /// e.g. 2/10 meets 0.2.
    pub fn is_frequent(&self, count: usize, n_rows: usize) -> bool {
        n_rows > 0 && count > 0 && count as f64 / n_rows as f64 >= self.min_support
    }

    /// Enumerate every itemset with support ≥ min_support and length ≤ max_len.
    pub fn enumerate(&self, dataset: &Dataset) -> FrequentItemsets {
        let n_rows = dataset.len();
        if n_rows == 0 || dataset.feature_count() == 0 || self.max_len == 0 {
            return FrequentItemsets::new(n_rows, Vec::new(), Vec::new());
        }

        let (singletons, level_one) = self.frequent_items(dataset);
        let mut levels = vec![level_one];
        let mut frontier: Vec<FrequentItemset> = singletons
            .iter()
            .map(|(item, rows)| FrequentItemset {
                itemset: Itemset::single(*item),
                rows: rows.clone(),
            })
            .collect();
        debug!(length = 1, candidates = level_one.candidates, retained = level_one.retained, "mined level");

        let mut all = Vec::new();
        let mut length = 1;
        while length < self.max_len && !frontier.is_empty() {
            length += 1;
            let extended: Vec<(usize, Vec<FrequentItemset>)> = frontier
                .par_iter()
                .map(|parent| self.extend(parent, &singletons, n_rows))
                .collect();

            let candidates: usize = extended.iter().map(|(c, _)| c).sum();
            all.append(&mut frontier);
            frontier = extended.into_iter().flat_map(|(_, found)| found).collect();

            let stats = LevelStats {
                length,
                candidates,
                retained: frontier.len(),
            };
            debug!(length, candidates, retained = stats.retained, "mined level");
            levels.push(stats);
        }
        all.append(&mut frontier);

        FrequentItemsets::new(n_rows, all, levels)
    }

    /// Level 1: every observed item with its rows, filtered by support.
    fn frequent_items(&self, dataset: &Dataset) -> (Vec<(Item, RowSet)>, LevelStats) {
        let n_rows = dataset.len();
        let mut candidates = 0;
        let mut retained = Vec::new();
        for column in 0..dataset.feature_count() as u32 {
            let mut by_value: Vec<RowSet> = vec![Vec::new(); dataset.cardinality(column)];
            for row in 0..n_rows {
                by_value[dataset.code(column, row) as usize].push(row as u32);
            }
            for (value, rows) in by_value.into_iter().enumerate() {
                if rows.is_empty() {
                    continue;
                }
                candidates += 1;
                if self.is_frequent(rows.len(), n_rows) {
                    retained.push((Item::new(column, value as u32), rows));
                }
            }
        }
        let stats = LevelStats {
            length: 1,
            candidates,
            retained: retained.len(),
        };
        (retained, stats)
    }

    /// Extend `parent` with every frequent single item from a later column.
    /// Returns the number of candidates counted and the frequent extensions.
    fn extend(
        &self,
        parent: &FrequentItemset,
        singletons: &[(Item, RowSet)],
        n_rows: usize,
    ) -> (usize, Vec<FrequentItemset>) {
        let Some(last_column) = parent.itemset.last_column() else {
            return (0, Vec::new());
        };
        let start = singletons.partition_point(|(item, _)| item.column <= last_column);

        let mut candidates = 0;
        let mut found = Vec::new();
        for (item, rows) in &singletons[start..] {
            candidates += 1;
            let count = tidlist::intersection_len(&parent.rows, rows);
            if self.is_frequent(count, n_rows) {
                found.push(FrequentItemset {
                    itemset: parent.itemset.extended(*item),
                    rows: tidlist::intersect(&parent.rows, rows),
                });
            }
        }
        (candidates, found)
    }
}
