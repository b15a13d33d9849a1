//! Output table handed back to the host.

use divex_core::types::Metric;
use serde_json::{json, Map, Value};

use crate::divergence::DivergenceRecord;

/// Ordered divergence records for one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    metric: Metric,
    records: Vec<DivergenceRecord>,
}

impl ResultTable {
    pub fn new(metric: Metric, records: Vec<DivergenceRecord>) -> Self {
        Self { metric, records }
    }

    pub fn empty(metric: Metric) -> Self {
        Self::new(metric, Vec::new())
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn records(&self) -> &[DivergenceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DivergenceRecord> {
        self.records.get(index)
    }

    /// Rendered itemsets in table order.
    pub fn labels(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.label.as_str()).collect()
    }

    /// Output column names, e.g.
    /// `itemsets, support, support_count, fpr, d_fpr, t_value_fp`.
    pub fn column_names(&self) -> [&'static str; 6] {
        [
            "itemsets",
            "support",
            "support_count",
            self.metric.rate_name(),
            self.metric.name(),
            self.metric.t_value_name(),
        ]
    }

    /// Row-oriented JSON: one object per record keyed by `column_names`.
    /// Undefined rates and divergences are `null`.
    pub fn to_json(&self) -> Value {
        let [itemsets, support, support_count, rate, divergence, t_value] = self.column_names();
        let rows = self
            .records
            .iter()
            .map(|r| {
                let mut row = Map::new();
                row.insert(itemsets.to_string(), json!(r.label));
                row.insert(support.to_string(), json!(r.support));
                row.insert(support_count.to_string(), json!(r.support_count));
                row.insert(rate.to_string(), json!(r.rate));
                row.insert(divergence.to_string(), json!(r.divergence));
                row.insert(t_value.to_string(), json!(r.significance));
                Value::Object(row)
            })
            .collect();
        Value::Array(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{ConfusionCounts, Itemset};

    #[test]
    fn test_column_names_follow_metric() {
        let table = ResultTable::empty(Metric::FalsePositiveRate);
        assert_eq!(
            table.column_names(),
            ["itemsets", "support", "support_count", "fpr", "d_fpr", "t_value_fp"]
        );
        let table = ResultTable::empty(Metric::Accuracy);
        assert_eq!(table.column_names()[3], "accuracy");
        assert!(table.is_empty());
    }

    #[test]
    fn test_to_json_rows() {
        let record = DivergenceRecord {
            itemset: Itemset::empty(),
            label: "region=B".to_string(),
            support: 0.4,
            support_count: 4,
            counts: ConfusionCounts::default(),
            rate: None,
            divergence: None,
            significance: 0.0,
            credible_interval: None,
        };
        let table = ResultTable::new(Metric::FalseNegativeRate, vec![record]);
        let json = table.to_json();
        let row = &json[0];
        assert_eq!(row["itemsets"], "region=B");
        assert_eq!(row["support_count"], 4);
        assert!(row["fnr"].is_null());
        assert!(row["d_fnr"].is_null());
        assert_eq!(row["t_value_fn"], 0.0);
    }
}
