//! Deterministic ranking order.

use std::cmp::Ordering;

use crate::divergence::DivergenceRecord;

/// Ranking order: divergence descending with undefined divergence last,
/// then support_count descending, then rendered itemset ascending.
pub fn rank_order(a: &DivergenceRecord, b: &DivergenceRecord) -> Ordering {
    let by_divergence = match (a.divergence, b.divergence) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_divergence
        .then_with(|| b.support_count.cmp(&a.support_count))
        .then_with(|| a.label.cmp(&b.label))
}
