//! Items, itemsets, and per-row outcomes.

use divex_core::types::collections::SmallVec4;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Sorted row indices covered by an itemset.
pub type RowSet = Vec<u32>;

/// A single `column = value` constraint.
///
/// `column` indexes the dataset's feature columns in name order and `value`
/// indexes that column's dictionary in text order, so the derived ordering
/// is the canonical (column name, value text) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Item {
    pub column: u32,
    pub value: u32,
}

impl Item {
    pub fn new(column: u32, value: u32) -> Self {
        Self { column, value }
    }
}

/// A conjunction of items, no two sharing a column, kept in canonical order.
/// Doubles as the lookup key for its record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Itemset(SmallVec4<Item>);

impl Itemset {
    /// The empty conjunction; covers every row.
    pub fn empty() -> Self {
        Self(SmallVec::new())
    }

    /// Build a canonical itemset. Returns `None` if two items share a column.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Option<Self> {
        let mut items: SmallVec4<Item> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        if items.windows(2).any(|w| w[0].column == w[1].column) {
            return None;
        }
        Some(Self(items))
    }

    pub fn single(item: Item) -> Self {
        let mut items = SmallVec::new();
        items.push(item);
        Self(items)
    }

    pub fn items(&self) -> &[Item] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Column of the last item; extensions must use a greater column.
    pub fn last_column(&self) -> Option<u32> {
        self.0.last().map(|i| i.column)
    }

    /// Append an item whose column sorts after every existing item.
    pub fn extended(&self, item: Item) -> Self {
        debug_assert!(self.last_column().map_or(true, |c| c < item.column));
        let mut items = self.0.clone();
        items.push(item);
        Self(items)
    }

    /// Copy of this itemset with the item at `index` removed.
    pub fn without(&self, index: usize) -> Self {
        let mut items = self.0.clone();
        items.remove(index);
        Self(items)
    }

    /// Sub-itemset selected by the bits of `mask` (bit i keeps item i).
    pub fn select(&self, mask: u32) -> Self {
        Self(
            self.0
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, item)| *item)
                .collect(),
        )
    }

    /// Sorted-slice containment: every item of `self` appears in `other`.
    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        if self.len() > other.len() {
            return false;
        }
        let mut rest = other.items().iter();
        self.0.iter().all(|item| rest.any(|o| o == item))
    }

    /// True when one itemset contains the other.
    pub fn is_nested_with(&self, other: &Itemset) -> bool {
        self.is_subset_of(other) || other.is_subset_of(self)
    }
}

/// Confusion-matrix cell of one row, with 1 as the positive label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    TruePositive,
    FalsePositive,
    FalseNegative,
    TrueNegative,
}

impl Outcome {
    pub fn from_labels(true_label: u8, predicted: u8) -> Self {
        match (true_label, predicted) {
            (1, 1) => Self::TruePositive,
            (0, 1) => Self::FalsePositive,
            (1, 0) => Self::FalseNegative,
            _ => Self::TrueNegative,
        }
    }
}

/// Confusion-matrix counts over a set of rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub true_pos: u64,
    pub false_pos: u64,
    pub false_neg: u64,
    pub true_neg: u64,
}

impl ConfusionCounts {
    pub fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::TruePositive => self.true_pos += 1,
            Outcome::FalsePositive => self.false_pos += 1,
            Outcome::FalseNegative => self.false_neg += 1,
            Outcome::TrueNegative => self.true_neg += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.true_pos + self.false_pos + self.false_neg + self.true_neg
    }

    /// Rows whose true label is positive.
    pub fn actual_positives(&self) -> u64 {
        self.true_pos + self.false_neg
    }

    /// Rows whose true label is negative.
    pub fn actual_negatives(&self) -> u64 {
        self.false_pos + self.true_neg
    }

    /// Rows predicted positive.
    pub fn predicted_positives(&self) -> u64 {
        self.true_pos + self.false_pos
    }

    /// Rows predicted negative.
    pub fn predicted_negatives(&self) -> u64 {
        self.true_neg + self.false_neg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[(u32, u32)]) -> Itemset {
        Itemset::from_items(items.iter().map(|&(c, v)| Item::new(c, v))).unwrap()
    }

    #[test]
    fn test_from_items_canonicalizes() {
        let a = set(&[(2, 0), (0, 1)]);
        let b = set(&[(0, 1), (2, 0)]);
        assert_eq!(a, b);
        assert_eq!(a.items()[0], Item::new(0, 1));
        assert_eq!(a.last_column(), Some(2));
    }

    #[test]
    fn test_from_items_rejects_same_column() {
        assert!(Itemset::from_items([Item::new(1, 0), Item::new(1, 2)]).is_none());
    }

    #[test]
    fn test_subset_checks() {
        let small = set(&[(0, 1)]);
        let big = set(&[(0, 1), (3, 2)]);
        let other = set(&[(0, 2), (3, 2)]);
        assert!(small.is_subset_of(&big));
        assert!(!big.is_subset_of(&small));
        assert!(small.is_nested_with(&big));
        assert!(big.is_nested_with(&small));
        assert!(!small.is_nested_with(&other));
        assert!(Itemset::empty().is_subset_of(&small));
    }

    #[test]
    fn test_select_and_without() {
        let s = set(&[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(s.select(0b101), set(&[(0, 0), (2, 2)]));
        assert_eq!(s.without(1), set(&[(0, 0), (2, 2)]));
        assert!(s.select(0).is_empty());
    }

    #[test]
    fn test_confusion_counts() {
        let mut counts = ConfusionCounts::default();
        for (t, p) in [(1, 1), (0, 1), (1, 0), (0, 0), (0, 0)] {
            counts.add(Outcome::from_labels(t, p));
        }
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.actual_negatives(), 3);
        assert_eq!(counts.actual_positives(), 2);
        assert_eq!(counts.predicted_positives(), 2);
        assert_eq!(counts.predicted_negatives(), 3);
    }
}
