//! End-to-end tests for the DivExplorer operator.

use divex_analysis::dataset::Column;
use divex_analysis::{DivExplorer, InputTable};
use divex_core::config::ExplorerConfig;
use divex_core::errors::{AttributionError, ConfigError, DatasetError, DivexErrorCode, ExplorerError};
use divex_core::traits::TableOperator;
use divex_core::types::Metric;

fn scenario() -> InputTable {
    InputTable::new(vec![
        Column::ints("class", &[1, 1, 1, 1, 0, 0, 0, 0, 0, 0]),
        Column::ints("predicted", &[1, 1, 0, 0, 1, 1, 0, 0, 0, 0]),
        Column::texts("region", &["A", "A", "A", "B", "A", "B", "B", "B", "A", "A"]),
    ])
}

fn scenario_with_age() -> InputTable {
    scenario().with_column(Column::ints("age", &[1, 1, 2, 2, 1, 1, 2, 2, 1, 3]))
}

fn config(min_support: f64, max_len: usize) -> ExplorerConfig {
    ExplorerConfig {
        min_support: Some(min_support),
        max_len: Some(max_len),
        metric: Some("d_fpr".to_string()),
        ..Default::default()
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_single_feature_scenario() {
    let explorer = DivExplorer::configure(&config(0.2, 1)).unwrap();
    let table = explorer.evaluate(&scenario()).unwrap();

    assert_eq!(table.metric(), Metric::FalsePositiveRate);
    assert_eq!(table.labels(), vec!["region=A", "region=B"]);

    let b = table.get(1).unwrap();
    assert_eq!(b.support_count, 4);
    assert_close(b.support, 0.4);
    assert_close(b.rate.unwrap(), 1.0 / 3.0);
    assert_eq!(b.divergence, Some(0.0));
    // Posterior means differ slightly even when the raw rates agree.
    assert!(b.significance.is_finite() && b.significance > 0.0);

    let a = table.get(0).unwrap();
    assert_eq!(a.support_count, 6);
    assert_eq!(a.counts.false_pos, 1);
    assert_eq!(a.counts.actual_negatives(), 3);
}

#[test]
fn test_top_one_breaks_divergence_tie_by_support() {
    let cfg = ExplorerConfig {
        top_k: Some(1),
        ..config(0.2, 1)
    };
    let table = DivExplorer::configure(&cfg).unwrap().evaluate(&scenario()).unwrap();
    assert_eq!(table.labels(), vec!["region=A"]);
}

#[test]
fn test_baseline_matches_global_rate() {
    let exploration = DivExplorer::configure(&config(0.2, 2))
        .unwrap()
        .explore(&scenario_with_age())
        .unwrap();
    let baseline = exploration.scored().baseline();
    assert!(baseline.itemset.is_empty());
    assert_eq!(baseline.support_count, 10);
    assert_close(baseline.support, 1.0);
    assert_close(baseline.rate.unwrap(), 1.0 / 3.0);
    assert_eq!(baseline.divergence, Some(0.0));
    // The empty itemset is never a row of the result.
    assert!(exploration.table().records().iter().all(|r| !r.itemset.is_empty()));
}

#[test]
fn test_results_sorted_by_divergence() {
    let table = DivExplorer::configure(&config(0.2, 2))
        .unwrap()
        .evaluate(&scenario_with_age())
        .unwrap();
    assert!(!table.is_empty());
    // age=1: FP on rows 4 and 5 out of negatives 4, 5, 8.
    assert_eq!(table.labels()[0], "age=1");
    assert_close(table.get(0).unwrap().divergence.unwrap(), 2.0 / 3.0 - 1.0 / 3.0);

    let divergences: Vec<f64> = table
        .records()
        .iter()
        .map(|r| r.divergence.unwrap_or(f64::NEG_INFINITY))
        .collect();
    assert!(divergences.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_undefined_rates_sort_last() {
    let table = DivExplorer::configure(&config(0.1, 2))
        .unwrap()
        .evaluate(&scenario_with_age())
        .unwrap();
    // age=3 covers only row 9, a true negative: rate 0/1 is defined.
    // age=2, region=A covers only row 2, a positive: no negatives, undefined.
    let undefined = table
        .records()
        .iter()
        .position(|r| r.divergence.is_none())
        .unwrap();
    assert_eq!(table.get(undefined).unwrap().label, "age=2, region=A");
    assert!(table.records()[undefined..].iter().all(|r| r.divergence.is_none()));
    assert!(table.get(undefined).unwrap().rate.is_none());
}

#[test]
fn test_missing_label_column() {
    let table = InputTable::new(vec![
        Column::ints("class", &[1, 0]),
        Column::texts("region", &["A", "B"]),
    ]);
    let err = DivExplorer::with_defaults().evaluate(&table).unwrap_err();
    assert_eq!(err.error_code(), "MISSING_COLUMN");
    match err {
        ExplorerError::Dataset(DatasetError::MissingColumn(name)) => assert_eq!(name, "predicted"),
        other => panic!("Expected MissingColumn, got: {:?}", other),
    }
}

#[test]
fn test_unknown_metric_fails_at_configure() {
    let cfg = ExplorerConfig {
        metric: Some("d_unicorn".to_string()),
        ..Default::default()
    };
    match DivExplorer::configure(&cfg).unwrap_err() {
        ConfigError::UnknownMetric(name) => assert_eq!(name, "d_unicorn"),
        other => panic!("Expected UnknownMetric, got: {:?}", other),
    }
}

#[test]
fn test_invalid_min_support_fails_at_configure() {
    assert!(DivExplorer::configure(&config(0.0, 2)).is_err());
    assert!(DivExplorer::configure(&config(1.5, 2)).is_err());
}

#[test]
fn test_empty_table_gives_empty_result() {
    let table = InputTable::new(vec![
        Column::ints("class", &[]),
        Column::ints("predicted", &[]),
        Column::texts("region", &[]),
    ]);
    let exploration = DivExplorer::with_defaults().explore(&table).unwrap();
    assert!(exploration.table().is_empty());
    assert_eq!(exploration.diagnostics().rows, 0);
    assert_eq!(exploration.diagnostics().frequent_itemsets, 0);
    // Column names still follow the metric.
    assert_eq!(exploration.table().column_names()[4], "d_fpr");
}

#[test]
fn test_all_columns_ignored_gives_empty_result() {
    let cfg = ExplorerConfig {
        ignore_cols: vec!["region".to_string(), "not_a_column".to_string()],
        ..config(0.1, 3)
    };
    let exploration = DivExplorer::configure(&cfg).unwrap().explore(&scenario()).unwrap();
    assert!(exploration.table().is_empty());
    assert_eq!(exploration.diagnostics().eligible_columns, 0);
    assert_eq!(exploration.scored().baseline().support_count, 10);
}

#[test]
fn test_redundancy_pruning_without_threshold() {
    let cfg = ExplorerConfig {
        top_k: Some(3),
        ..config(0.2, 2)
    };
    let exploration = DivExplorer::configure(&cfg)
        .unwrap()
        .explore(&scenario_with_age())
        .unwrap();
    let records = exploration.table().records();
    assert!(records.len() <= 3);
    for (i, a) in records.iter().enumerate() {
        for b in &records[i + 1..] {
            assert!(!a.itemset.is_nested_with(&b.itemset), "{} nests {}", a.label, b.label);
        }
    }
    assert!(exploration.diagnostics().redundant_dropped > 0);
}

#[test]
fn test_redundancy_threshold_keeps_distinct_divergences() {
    let cfg = ExplorerConfig {
        top_k: Some(10),
        th_redundancy: Some(0.0),
        ..config(0.2, 2)
    };
    let table = DivExplorer::configure(&cfg)
        .unwrap()
        .evaluate(&scenario_with_age())
        .unwrap();
    // age=1 (1/3) and age=1, region=A (1/6) are nested but differ.
    let labels = table.labels();
    assert!(labels.contains(&"age=1"));
    assert!(labels.contains(&"age=1, region=A"));
    for (i, a) in table.records().iter().enumerate() {
        for b in &table.records()[i + 1..] {
            if a.itemset.is_nested_with(&b.itemset) {
                assert_ne!(a.divergence, b.divergence);
            }
        }
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let explorer = DivExplorer::configure(&config(0.1, 3)).unwrap();
    let input = scenario_with_age();
    let first = explorer.evaluate(&input).unwrap();
    let second = explorer.evaluate(&input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_column_order_does_not_change_result() {
    let explorer = DivExplorer::configure(&config(0.1, 2)).unwrap();
    let reordered = InputTable::new(vec![
        Column::ints("age", &[1, 1, 2, 2, 1, 1, 2, 2, 1, 3]),
        Column::texts("region", &["A", "A", "A", "B", "A", "B", "B", "B", "A", "A"]),
        Column::ints("predicted", &[1, 1, 0, 0, 1, 1, 0, 0, 0, 0]),
        Column::ints("class", &[1, 1, 1, 1, 0, 0, 0, 0, 0, 0]),
    ]);
    assert_eq!(
        explorer.evaluate(&scenario_with_age()).unwrap().labels(),
        explorer.evaluate(&reordered).unwrap().labels()
    );
}

#[test]
fn test_shapley_contributions_sum_to_divergence() {
    let exploration = DivExplorer::configure(&config(0.2, 2))
        .unwrap()
        .explore(&scenario_with_age())
        .unwrap();
    let contributions = exploration.attribute("age=1, region=A").unwrap();
    assert_eq!(contributions.len(), 2);
    assert_eq!(contributions[0].label, "age=1");
    assert_eq!(contributions[1].label, "region=A");

    let total: f64 = contributions.iter().map(|c| c.contribution).sum();
    let divergence = exploration.scored().find("age=1, region=A").unwrap().divergence.unwrap();
    assert_close(total, divergence);
    assert_close(divergence, 0.5 - 1.0 / 3.0);
    // Δ(age=1) = 1/3, Δ(region=A) = 0, Δ(both) = 1/6.
    assert_close(contributions[0].contribution, 0.25);
    assert_close(contributions[1].contribution, -1.0 / 12.0);
}

#[test]
fn test_attribution_of_unknown_itemset() {
    let exploration = DivExplorer::configure(&config(0.2, 2))
        .unwrap()
        .explore(&scenario_with_age())
        .unwrap();
    assert!(matches!(
        exploration.attribute("region=Z"),
        Err(AttributionError::ItemsetNotFound(_))
    ));
    // age=3 exists but is not frequent at 0.2.
    assert!(matches!(
        exploration.attribute("age=3"),
        Err(AttributionError::ItemsetNotFound(_))
    ));
}

#[test]
fn test_table_operator_contract() {
    fn run<T: TableOperator>(config: &T::Config, input: &T::Input) -> (String, T::Output) {
        let op = T::configure(config).unwrap();
        let name = op.name().to_string();
        (name, op.evaluate(input).unwrap())
    }
    let (name, table) = run::<DivExplorer>(&config(0.2, 1), &scenario());
    assert_eq!(name, "DivExplorer");
    assert_eq!(table.len(), 2);
}

#[test]
fn test_json_round_trip_through_host_boundary() {
    let input = InputTable::from_json(
        r#"{
            "class": [1, 1, 1, 1, 0, 0, 0, 0, 0, 0],
            "predicted": [1, 1, 0, 0, 1, 1, 0, 0, 0, 0],
            "region": ["A", "A", "A", "B", "A", "B", "B", "B", "A", "A"]
        }"#,
    )
    .unwrap();
    let table = DivExplorer::configure(&config(0.2, 1)).unwrap().evaluate(&input).unwrap();
    let json = table.to_json();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["itemsets"], "region=A");
    assert_eq!(json[1]["support_count"], 4);
    assert_eq!(json[1]["d_fpr"], 0.0);
    assert!(json[1].get("t_value_fp").is_some());
}

#[test]
fn test_other_metric_columns() {
    let cfg = ExplorerConfig {
        metric: Some("d_fnr".to_string()),
        ..config(0.2, 1)
    };
    let table = DivExplorer::configure(&cfg).unwrap().evaluate(&scenario()).unwrap();
    assert_eq!(table.column_names()[3], "fnr");
    // Global fnr 2/4; region=A: positives 0,1,2 with FN on 2 → 1/3.
    let a = table.records().iter().find(|r| r.label == "region=A").unwrap();
    assert_close(a.divergence.unwrap(), 1.0 / 3.0 - 0.5);
    // region=B: positive row 3 is a FN → 1/1.
    assert_close(table.get(0).unwrap().divergence.unwrap(), 0.5);
    assert_eq!(table.get(0).unwrap().label, "region=B");
}

#[test]
fn test_attribute_every_label_with_awkward_values() {
    let table = InputTable::new(vec![
        Column::ints("class", &[0, 0, 0, 0]),
        Column::ints("predicted", &[1, 0, 0, 0]),
        Column::texts("city", &["Paris, FR", "Paris, FR", " Rome", " Rome"]),
    ]);
    let exploration = DivExplorer::configure(&config(0.2, 1))
        .unwrap()
        .explore(&table)
        .unwrap();
    assert_eq!(exploration.table().labels(), vec!["city=Paris, FR", "city= Rome"]);

    for record in exploration.table().records() {
        let contributions = exploration.attribute(&record.label).unwrap();
        assert_eq!(contributions.len(), 1);
        assert_eq!(contributions[0].label, record.label);
        assert_close(contributions[0].contribution, record.divergence.unwrap());
    }
    assert!(exploration.attribute("").unwrap().is_empty());
}

#[test]
fn test_configure_from_project_file() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(divex_core::config::divex_config::PROJECT_CONFIG_FILE),
        r#"
[explorer]
min_support = 0.2
max_len = 1
metric = "d_fpr"
top_k = 1
"#,
    )
    .unwrap();

    let loaded = divex_core::config::DivexConfig::load(dir.path(), None).unwrap();
    let explorer = DivExplorer::from_config(&loaded).unwrap();
    let table = explorer.evaluate(&scenario()).unwrap();
    assert_eq!(table.labels(), vec!["region=A"]);
}
