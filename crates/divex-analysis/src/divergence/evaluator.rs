//! Scores every frequent itemset against the global baseline.

use divex_core::types::collections::FxHashMap;
use divex_core::types::Metric;
use rayon::prelude::*;

use super::metric::OutcomeRate;
use super::record::DivergenceRecord;
use crate::dataset::{ConfusionCounts, Dataset, Itemset};
use crate::mining::frequent::support_fraction;
use crate::mining::FrequentItemsets;

/// Evaluates one metric over a set of frequent itemsets.
#[derive(Debug, Clone, Copy)]
pub struct DivergenceEvaluator {
    metric: Metric,
    min_count: u64,
}

impl DivergenceEvaluator {
    pub fn new(metric: Metric, min_count: u64) -> Self {
        Self { metric, min_count }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Score the empty conjunction, i.e. the whole dataset.
    pub fn baseline(&self, dataset: &Dataset) -> DivergenceRecord {
        let rows = dataset.rows_matching(&[]);
        let counts = dataset.confusion(&rows);
        self.record(Itemset::empty(), String::new(), counts, &counts, dataset.len())
    }

    /// One record per frequent itemset, in the enumerator's order.
    pub fn evaluate(&self, dataset: &Dataset, frequent: &FrequentItemsets) -> ScoredItemsets {
        let baseline = self.baseline(dataset);
        let global = baseline.counts;
        let n_rows = frequent.n_rows();

        let records: Vec<DivergenceRecord> = frequent
            .as_slice()
            .par_iter()
            .map(|f| {
                let counts = dataset.confusion(&f.rows);
                self.record(f.itemset.clone(), dataset.render(&f.itemset), counts, &global, n_rows)
            })
            .collect();

        ScoredItemsets::new(self.metric, baseline, records)
    }

    fn record(
        &self,
        itemset: Itemset,
        label: String,
        counts: ConfusionCounts,
        global: &ConfusionCounts,
        n_rows: usize,
    ) -> DivergenceRecord {
        let score = self.metric.score(&counts, global, self.min_count);
        let support = support_fraction(counts.total(), n_rows);
        DivergenceRecord::new(itemset, label, support, counts, score)
    }
}

/// Scored itemsets keyed by canonical itemset.
#[derive(Debug, Clone)]
pub struct ScoredItemsets {
    metric: Metric,
    baseline: DivergenceRecord,
    records: Vec<DivergenceRecord>,
    index: FxHashMap<Itemset, usize>,
}

impl ScoredItemsets {
    pub fn new(metric: Metric, baseline: DivergenceRecord, records: Vec<DivergenceRecord>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.itemset.clone(), i))
            .collect();
        Self {
            metric,
            baseline,
            records,
            index,
        }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Record of the empty conjunction (global rate, divergence 0).
    pub fn baseline(&self) -> &DivergenceRecord {
        &self.baseline
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

    /// Look up a record; the empty itemset resolves to the baseline.
    pub fn get(&self, itemset: &Itemset) -> Option<&DivergenceRecord> {
        if itemset.is_empty() {
            return Some(&self.baseline);
        }
        self.index.get(itemset).map(|&i| &self.records[i])
    }

    /// Look up a record by its rendered conjunction.
    pub fn find(&self, label: &str) -> Option<&DivergenceRecord> {
        self.records.iter().find(|r| r.label == label)
    }
}
