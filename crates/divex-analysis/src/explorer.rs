//! The DivExplorer operator: configure once, evaluate per table.
//!
//! Stages run strictly forward: encode → enumerate → score → rank. Tid-lists
//! built during enumeration are dropped once scoring is done; nothing
//! outlives the call except the returned values.

use std::fmt;
use std::time::Instant;

use divex_core::config::explorer_config::{DEFAULT_MAX_LEN, DEFAULT_MIN_COUNT, DEFAULT_MIN_SUPPORT};
use divex_core::config::{DivexConfig, ExplorerConfig};
use divex_core::errors::{AttributionError, ConfigError, ExplorerError};
use divex_core::traits::TableOperator;
use divex_core::types::Metric;
use tracing::info;

use crate::attribution::{self, ItemContribution};
use crate::dataset::{Dataset, InputTable, Itemset};
use crate::divergence::{DivergenceEvaluator, ScoredItemsets};
use crate::mining::{ItemsetEnumerator, LevelStats};
use crate::ranking::{ResultTable, TopKFilter};

/// Validated, frozen explorer options.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerSettings {
    pub min_support: f64,
    pub max_len: usize,
    pub metric: Metric,
    pub ignore_cols: Vec<String>,
    pub th_redundancy: Option<f64>,
    pub top_k: Option<usize>,
    pub min_count: u64,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            max_len: DEFAULT_MAX_LEN,
            metric: Metric::default(),
            ignore_cols: Vec::new(),
            th_redundancy: None,
            top_k: None,
            min_count: DEFAULT_MIN_COUNT,
        }
    }
}

impl TryFrom<&ExplorerConfig> for ExplorerSettings {
    type Error = ConfigError;

    fn try_from(config: &ExplorerConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        Ok(Self {
            min_support: config.effective_min_support(),
            max_len: config.effective_max_len(),
            metric: config.effective_metric()?,
            ignore_cols: config.ignore_cols.clone(),
            th_redundancy: config.th_redundancy,
            top_k: config.top_k,
            min_count: config.effective_min_count(),
        })
    }
}

/// Divergence-based subgroup explorer.
#[derive(Debug, Clone)]
pub struct DivExplorer {
    settings: ExplorerSettings,
    enumerator: ItemsetEnumerator,
    evaluator: DivergenceEvaluator,
    filter: TopKFilter,
}

impl DivExplorer {
    pub const NAME: &'static str = "DivExplorer";

    /// Validate `config` and freeze it. Invalid options fail here.
    pub fn configure(config: &ExplorerConfig) -> Result<Self, ConfigError> {
        ExplorerSettings::try_from(config).map(Self::from_settings)
    }

    /// Configure from a loaded top-level config.
    pub fn from_config(config: &DivexConfig) -> Result<Self, ConfigError> {
        Self::configure(&config.explorer)
    }

    /// Explorer with every option at its default.
    pub fn with_defaults() -> Self {
        Self::from_settings(ExplorerSettings::default())
    }

    fn from_settings(settings: ExplorerSettings) -> Self {
        Self {
            enumerator: ItemsetEnumerator::new(settings.min_support, settings.max_len),
            evaluator: DivergenceEvaluator::new(settings.metric, settings.min_count),
            filter: TopKFilter::new(settings.top_k, settings.th_redundancy),
            settings,
        }
    }

    /// Run the full pipeline and return the ranked table.
    pub fn evaluate(&self, table: &InputTable) -> Result<ResultTable, ExplorerError> {
        Ok(self.explore(table)?.into_table())
    }

    /// Run the full pipeline, keeping the scored itemsets and diagnostics.
    pub fn explore(&self, table: &InputTable) -> Result<Exploration, ExplorerError> {
        let started = Instant::now();
        let dataset = Dataset::from_table(table, &self.settings.ignore_cols)?;

        let frequent = self.enumerator.enumerate(&dataset);
        let scored = self.evaluator.evaluate(&dataset, &frequent);
        let levels = frequent.levels().to_vec();
        let frequent_itemsets = frequent.len();
        drop(frequent);

        let selection = self.filter.select(scored.records());
        let table = ResultTable::new(self.settings.metric, selection.records);

        let diagnostics = ExplorationDiagnostics {
            rows: dataset.len(),
            eligible_columns: dataset.feature_count(),
            levels,
            frequent_itemsets,
            records_returned: table.len(),
            redundant_dropped: selection.redundant,
            elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
        };
        info!(
            metric = %self.settings.metric,
            rows = diagnostics.rows,
            frequent = diagnostics.frequent_itemsets,
            returned = diagnostics.records_returned,
            redundant = diagnostics.redundant_dropped,
            elapsed_ms = diagnostics.elapsed_ms,
            "divergence exploration complete"
        );

        Ok(Exploration {
            dataset,
            scored,
            table,
            diagnostics,
        })
    }
}

impl TableOperator for DivExplorer {
    type Config = ExplorerConfig;
    type Input = InputTable;
    type Output = ResultTable;
    type Error = ExplorerError;

    fn configure(config: &ExplorerConfig) -> Result<Self, ConfigError> {
        DivExplorer::configure(config)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn evaluate(&self, input: &InputTable) -> Result<ResultTable, ExplorerError> {
        DivExplorer::evaluate(self, input)
    }
}

/// Everything one exploration produced.
#[derive(Debug, Clone)]
pub struct Exploration {
    dataset: Dataset,
    scored: ScoredItemsets,
    table: ResultTable,
    diagnostics: ExplorationDiagnostics,
}

impl Exploration {
    pub fn table(&self) -> &ResultTable {
        &self.table
    }

    pub fn into_table(self) -> ResultTable {
        self.table
    }

    /// Every scored frequent itemset, before ranking.
    pub fn scored(&self) -> &ScoredItemsets {
        &self.scored
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn diagnostics(&self) -> &ExplorationDiagnostics {
        &self.diagnostics
    }

    /// Shapley contribution of each item of the scored itemset rendered as
    /// `label`. The label is matched exactly against the scored records, so
    /// values holding commas or padding resolve like any other.
    pub fn attribute(&self, label: &str) -> Result<Vec<ItemContribution>, AttributionError> {
        let itemset = if label.is_empty() {
            Itemset::empty()
        } else {
            self.scored
                .find(label)
                .map(|record| record.itemset.clone())
                .ok_or_else(|| AttributionError::ItemsetNotFound(label.to_string()))?
        };
        attribution::item_contributions(&self.dataset, &self.scored, &itemset)
    }
}

/// Diagnostics of one exploration.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorationDiagnostics {
    /// Rows in the input table.
    pub rows: usize,
    /// Feature columns eligible for items.
    pub eligible_columns: usize,
    /// Candidate and retained counts per itemset length.
    pub levels: Vec<LevelStats>,
    /// Frequent itemsets scored.
    pub frequent_itemsets: usize,
    /// Records in the result table.
    pub records_returned: usize,
    /// Records skipped as redundant.
    pub redundant_dropped: usize,
    /// Wall time of the call in milliseconds.
    pub elapsed_ms: f64,
}

impl fmt::Display for ExplorationDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExplorationDiagnostics {{ rows={}, columns={}, frequent={}, returned={}, redundant={}, elapsed={:.1}ms }}",
            self.rows,
            self.eligible_columns,
            self.frequent_itemsets,
            self.records_returned,
            self.redundant_dropped,
            self.elapsed_ms,
        )
    }
}
