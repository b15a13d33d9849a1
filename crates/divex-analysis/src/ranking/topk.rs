//! Top-K selection with redundancy pruning.
//!
//! Records are walked in rank order. A record is redundant with an accepted
//! one when their itemsets are nested (one contains the other) and, if a
//! tolerance is configured, their divergences differ by at most that
//! tolerance. Without a tolerance, nesting alone is redundancy.

use crate::divergence::DivergenceRecord;

use super::order::rank_order;

/// Top-K filter settings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TopKFilter {
    top_k: Option<usize>,
    th_redundancy: Option<f64>,
}

/// Output of the filter.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Accepted records, in rank order.
    pub records: Vec<DivergenceRecord>,
    /// Records skipped as redundant before the cap was reached.
    pub redundant: usize,
}

impl TopKFilter {
    pub fn new(top_k: Option<usize>, th_redundancy: Option<f64>) -> Self {
        Self {
            top_k,
            th_redundancy,
        }
    }

    /// Rank `records` and select. Without `top_k` every record is returned
    /// in rank order and nothing is pruned.
    pub fn select(&self, records: &[DivergenceRecord]) -> Selection {
        let mut ranked: Vec<&DivergenceRecord> = records.iter().collect();
        ranked.sort_by(|a, b| rank_order(a, b));

        let Some(k) = self.top_k else {
            return Selection {
                records: ranked.into_iter().cloned().collect(),
                redundant: 0,
            };
        };

        let mut accepted: Vec<&DivergenceRecord> = Vec::with_capacity(k.min(ranked.len()));
        let mut redundant = 0;
        for candidate in ranked {
            if accepted.len() >= k {
                break;
            }
            if accepted.iter().any(|a| self.is_redundant(candidate, a)) {
                redundant += 1;
                continue;
            }
            accepted.push(candidate);
        }

        Selection {
            records: accepted.into_iter().cloned().collect(),
            redundant,
        }
    }

    /// Redundancy test between a candidate and an accepted record.
    pub fn is_redundant(&self, candidate: &DivergenceRecord, accepted: &DivergenceRecord) -> bool {
        if !candidate.itemset.is_nested_with(&accepted.itemset) {
            return false;
        }
        match self.th_redundancy {
            None => true,
            Some(th) => match (candidate.divergence, accepted.divergence) {
                (Some(a), Some(b)) => (a - b).abs() <= th,
                _ => false,
            },
        }
    }
}
