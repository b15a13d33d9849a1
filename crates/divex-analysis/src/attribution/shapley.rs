//! Local Shapley values of the items of one itemset.
//!
//! φ_i = Σ_{S ⊆ I∖{i}} |S|!(|I|−|S|−1)!/|I|! · (Δ(S ∪ {i}) − Δ(S)), with
//! Δ(∅) = 0. Frequent itemsets are downward closed, so every S is a scored
//! record whenever I is. The values sum to Δ(I).

use divex_core::errors::AttributionError;
use serde::Serialize;

use crate::dataset::{Dataset, Item, Itemset};
use crate::divergence::ScoredItemsets;

/// Contribution of one item to an itemset's divergence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemContribution {
    #[serde(skip)]
    pub item: Item,
    /// Rendered `column=value`.
    pub label: String,
    pub contribution: f64,
}

/// Shapley contribution of each item of `itemset`, in canonical item order.
pub fn item_contributions(
    dataset: &Dataset,
    scored: &ScoredItemsets,
    itemset: &Itemset,
) -> Result<Vec<ItemContribution>, AttributionError> {
    if scored.get(itemset).is_none() {
        return Err(AttributionError::ItemsetNotFound(dataset.render(itemset)));
    }

    let n = itemset.len();
    let full: u32 = (1u32 << n) - 1;
    // Δ for every subset mask, computed once.
    let mut delta = Vec::with_capacity(1 << n);
    for mask in 0..=full {
        let subset = itemset.select(mask);
        let divergence = if subset.is_empty() {
            0.0
        } else {
            let record = scored
                .get(&subset)
                .ok_or_else(|| AttributionError::MissingSubset(dataset.render(&subset)))?;
            record
                .divergence
                .ok_or_else(|| AttributionError::UndefinedDivergence(dataset.render(&subset)))?
        };
        delta.push(divergence);
    }

    let weights = shapley_weights(n);
    let contributions = itemset
        .items()
        .iter()
        .enumerate()
        .map(|(i, &item)| {
            let bit = 1u32 << i;
            let contribution: f64 = (0..=full)
                .filter(|mask| mask & bit == 0)
                .map(|mask| {
                    let size = mask.count_ones() as usize;
                    weights[size] * (delta[(mask | bit) as usize] - delta[mask as usize])
                })
                .sum();
            ItemContribution {
                item,
                label: dataset.render_item(item),
                contribution,
            }
        })
        .collect();
    Ok(contributions)
}

/// Weight |S|!(n−|S|−1)!/n! indexed by |S|, for S not containing the item.
fn shapley_weights(n: usize) -> Vec<f64> {
    let factorial = |k: usize| (1..=k).map(|v| v as f64).product::<f64>();
    (0..n)
        .map(|s| factorial(s) * factorial(n - s - 1) / factorial(n))
        .collect()
}
