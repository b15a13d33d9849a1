//! Encoded dataset: dictionary-coded feature columns plus row outcomes.
//!
//! Built once per invocation from an `InputTable` and never mutated
//! afterwards, so every downstream stage can share it by reference.

use std::collections::BTreeSet;

use divex_core::errors::DatasetError;
use divex_core::types::collections::FxHashSet;

use super::table::{CellValue, Column, InputTable, PREDICTED_LABEL_COLUMN, TRUE_LABEL_COLUMN};
use super::types::{ConfusionCounts, Item, Itemset, Outcome, RowSet};

/// One categorical feature column, dictionary-encoded.
#[derive(Debug, Clone)]
struct FeatureColumn {
    name: String,
    /// Distinct values in text order; the code of a value is its index.
    dictionary: Vec<String>,
    /// Per-row value code.
    codes: Vec<u32>,
}

/// Read-only, encoded view of one input table.
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Vec<FeatureColumn>,
    outcomes: Vec<Outcome>,
}

impl Dataset {
    /// Validate and encode `table`.
    ///
    /// `class` and `predicted` must exist and hold 0/1 integers. Every other
    /// column not named in `ignore_cols` becomes a feature column and must
    /// hold cells of one shape, all integers or all text. Unknown names in
    /// `ignore_cols` are ignored.
    pub fn from_table(table: &InputTable, ignore_cols: &[String]) -> Result<Self, DatasetError> {
        let mut seen = FxHashSet::default();
        for column in &table.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(DatasetError::DuplicateColumn(column.name.clone()));
            }
        }

        let true_col = table
            .column(TRUE_LABEL_COLUMN)
            .ok_or_else(|| DatasetError::MissingColumn(TRUE_LABEL_COLUMN.to_string()))?;
        let pred_col = table
            .column(PREDICTED_LABEL_COLUMN)
            .ok_or_else(|| DatasetError::MissingColumn(PREDICTED_LABEL_COLUMN.to_string()))?;

        let n_rows = true_col.values.len();
        for column in &table.columns {
            if column.values.len() != n_rows {
                return Err(DatasetError::LengthMismatch {
                    column: column.name.clone(),
                    expected: n_rows,
                    actual: column.values.len(),
                });
            }
        }

        let true_labels = parse_labels(true_col)?;
        let predicted = parse_labels(pred_col)?;
        let outcomes = true_labels
            .iter()
            .zip(&predicted)
            .map(|(&t, &p)| Outcome::from_labels(t, p))
            .collect();

        let mut features: Vec<FeatureColumn> = table
            .columns
            .iter()
            .filter(|c| c.name != TRUE_LABEL_COLUMN && c.name != PREDICTED_LABEL_COLUMN)
            .filter(|c| !ignore_cols.iter().any(|ignored| *ignored == c.name))
            .map(encode_feature)
            .collect::<Result<_, _>>()?;
        features.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self { features, outcomes })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of eligible feature columns.
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Feature column names in canonical order.
    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|f| f.name.as_str())
    }

    /// Number of distinct values of feature column `column`.
    pub fn cardinality(&self, column: u32) -> usize {
        self.features[column as usize].dictionary.len()
    }

    /// Value code of `column` at `row`.
    pub fn code(&self, column: u32, row: usize) -> u32 {
        self.features[column as usize].codes[row]
    }

    pub fn outcome(&self, row: usize) -> Outcome {
        self.outcomes[row]
    }

    /// Resolve `column=value` text into an item, if both are known.
    pub fn item(&self, column: &str, value: &str) -> Option<Item> {
        let c = self.features.iter().position(|f| f.name == column)?;
        let v = self.features[c]
            .dictionary
            .binary_search_by(|d| d.as_str().cmp(value))
            .ok()?;
        Some(Item::new(c as u32, v as u32))
    }

    /// Render an item as `column=value`.
    pub fn render_item(&self, item: Item) -> String {
        let feature = &self.features[item.column as usize];
        format!("{}={}", feature.name, feature.dictionary[item.value as usize])
    }

    /// Render an itemset as a comma-separated conjunction in canonical order.
    pub fn render(&self, itemset: &Itemset) -> String {
        itemset
            .items()
            .iter()
            .map(|&item| self.render_item(item))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Rows satisfying every item, by direct scan. The empty slice covers
    /// every row.
    pub fn rows_matching(&self, items: &[Item]) -> RowSet {
        (0..self.len())
            .filter(|&row| items.iter().all(|item| self.code(item.column, row) == item.value))
            .map(|row| row as u32)
            .collect()
    }

    /// Exact coverage count of `items`, by direct scan.
    pub fn support_count(&self, items: &[Item]) -> u64 {
        (0..self.len())
            .filter(|&row| items.iter().all(|item| self.code(item.column, row) == item.value))
            .count() as u64
    }

    /// Confusion counts over `rows`.
    pub fn confusion(&self, rows: &[u32]) -> ConfusionCounts {
        let mut counts = ConfusionCounts::default();
        for &row in rows {
            counts.add(self.outcomes[row as usize]);
        }
        counts
    }

    /// Confusion counts over the whole dataset.
    pub fn global_confusion(&self) -> ConfusionCounts {
        let mut counts = ConfusionCounts::default();
        for &outcome in &self.outcomes {
            counts.add(outcome);
        }
        counts
    }
}

fn parse_labels(column: &Column) -> Result<Vec<u8>, DatasetError> {
    column
        .values
        .iter()
        .enumerate()
        .map(|(row, cell)| match cell {
            CellValue::Int(0) => Ok(0),
            CellValue::Int(1) => Ok(1),
            other => Err(DatasetError::InvalidLabel {
                column: column.name.clone(),
                row,
                value: other.to_string(),
            }),
        })
        .collect()
}

fn encode_feature(column: &Column) -> Result<FeatureColumn, DatasetError> {
    let ints = column
        .values
        .iter()
        .filter(|v| matches!(v, CellValue::Int(_)))
        .count();
    if ints != 0 && ints != column.values.len() {
        return Err(DatasetError::MixedColumn(column.name.clone()));
    }

    let texts: Vec<String> = column.values.iter().map(CellValue::to_string).collect();
    let dictionary: Vec<String> = texts
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let codes = texts
        .iter()
        .map(|t| dictionary.binary_search(t).unwrap_or_else(|pos| pos) as u32)
        .collect();
    Ok(FeatureColumn {
        name: column.name.clone(),
        dictionary,
        codes,
    })
}
