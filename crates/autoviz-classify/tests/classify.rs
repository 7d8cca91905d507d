//! End-to-end classification scenarios over profiled row data.

use std::collections::BTreeMap;

use autoviz_classify::{classify, pick_aggregation, score_as_dimension, score_as_metric};
use autoviz_model::{Aggregation, CellValue, ChartKind, DatasetKind, DatasetProfile, Row};
use autoviz_profile::profile_rows;

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}

fn build(names: &[&str], rows: Vec<Row>) -> (DatasetProfile, Vec<Row>) {
    let profile = profile_rows(&headers(names), &rows, None);
    (profile, rows)
}

/// id is sequential 1..=n, revenue is a spread-out decimal quantity,
/// region cycles through four values.
fn sales_like_rows(n: usize) -> Vec<Row> {
    const REGIONS: [&str; 4] = ["North", "South", "East", "West"];
    (0..n)
        .map(|i| {
            let mut row = BTreeMap::new();
            row.insert("id".to_string(), CellValue::Number((i + 1) as f64));
            row.insert(
                "revenue".to_string(),
                CellValue::Number(10.0 + ((i * 7) % 40) as f64 * 124.7 + 0.25),
            );
            row.insert("region".to_string(), CellValue::Text(REGIONS[i % 4].into()));
            row
        })
        .collect()
}

#[test]
fn sequential_id_scores_negative_in_both_roles() {
    let (profile, rows) = build(&["id", "revenue", "region"], sales_like_rows(200));
    let id = profile.column("id").expect("id column");

    assert!(score_as_metric(id, &profile, &rows) < 0.0);
    assert!(score_as_dimension(id, &profile, &rows) < 0.0);
}

#[test]
fn revenue_is_top_metric_and_region_top_dimension() {
    let (profile, rows) = build(&["id", "revenue", "region"], sales_like_rows(200));
    let result = classify(&profile, &rows);

    assert_eq!(result.column_roles.numeric_columns[0], "revenue");
    assert_eq!(result.column_roles.categorical_columns[0], "region");
    assert_eq!(result.column_roles.target_column.as_deref(), Some("revenue"));
    // id is numeric and therefore ranked, but never the leader
    assert!(result.column_roles.numeric_columns.contains(&"id".to_string()));
}

#[test]
fn revenue_by_region_bar_leads_with_sum_aggregation() {
    let (profile, rows) = build(&["id", "revenue", "region"], sales_like_rows(200));
    let result = classify(&profile, &rows);

    let bar = result
        .recommendations
        .iter()
        .find(|r| r.chart == ChartKind::Bar)
        .expect("a bar recommendation");
    assert_eq!(bar.title, "Total Revenue by Region");
    assert_eq!(bar.x_column, "region");
    assert_eq!(bar.y_column, "revenue");
    // revenue spans far beyond 100 and has no average-flavored name
    assert_eq!(bar.aggregation, Aggregation::Sum);
    // MI bars are the first category, so the bar leads the list
    assert_eq!(result.recommendations[0].id, bar.id);
}

#[test]
fn rating_prefers_avg_and_wide_product_gets_bar_not_pie() {
    const PRODUCTS: usize = 15;
    let rows: Vec<Row> = (0..200)
        .map(|i| {
            let mut row = BTreeMap::new();
            row.insert("rating".to_string(), CellValue::Number((i % 5 + 1) as f64));
            row.insert(
                "product".to_string(),
                CellValue::Text(format!("product-{}", i % PRODUCTS)),
            );
            row
        })
        .collect();
    let (profile, rows) = build(&["rating", "product"], rows);

    let rating = profile.column("rating").expect("rating column");
    assert_eq!(pick_aggregation(rating), Aggregation::Avg);

    let result = classify(&profile, &rows);
    // 15 distinct products exceeds the pie cardinality cap of 12
    assert!(
        !result
            .recommendations
            .iter()
            .any(|r| r.chart == ChartKind::Pie && r.x_column == "product")
    );
    let bar = result
        .recommendations
        .iter()
        .find(|r| r.chart == ChartKind::Bar && r.x_column == "product")
        .expect("an MI-ranked bar for product");
    assert_eq!(bar.title, "Average Rating by Product");
    assert_eq!(bar.aggregation, Aggregation::Avg);
}

#[test]
fn pie_cardinality_boundary_is_inclusive_at_twelve() {
    let rows: Vec<Row> = (0..120)
        .map(|i| {
            let mut row = BTreeMap::new();
            row.insert("category".to_string(), CellValue::Text(format!("c{}", i % 12)));
            row.insert(
                "amount".to_string(),
                CellValue::Number(((i * 13) % 70) as f64 * 31.5 + 0.5),
            );
            row
        })
        .collect();
    let (profile, rows) = build(&["category", "amount"], rows);
    let result = classify(&profile, &rows);

    assert!(
        result
            .recommendations
            .iter()
            .any(|r| r.chart == ChartKind::Pie && r.x_column == "category"),
        "a 12-group dimension should still get a pie"
    );
}

#[test]
fn constant_column_never_appears_as_bar_or_pie_axis() {
    let rows: Vec<Row> = (0..100)
        .map(|i| {
            let mut row = BTreeMap::new();
            row.insert("constant".to_string(), CellValue::Number(7.0));
            row.insert(
                "load".to_string(),
                CellValue::Number(5.0 + ((i * 11) % 37) as f64 * 12.25),
            );
            row
        })
        .collect();
    let (profile, rows) = build(&["constant", "load"], rows);

    let constant = profile.column("constant").expect("constant column");
    assert!(score_as_metric(constant, &profile, &rows) < 0.0);

    let result = classify(&profile, &rows);
    for rec in &result.recommendations {
        if matches!(rec.chart, ChartKind::Bar | ChartKind::Pie) {
            assert_ne!(rec.x_column, "constant");
        }
    }
}

#[test]
fn date_columns_produce_time_series_recommendations() {
    let rows: Vec<Row> = (0..60)
        .map(|i| {
            let mut row = BTreeMap::new();
            row.insert(
                "day".to_string(),
                CellValue::Text(format!("2024-01-{:02}", i % 28 + 1)),
            );
            row.insert(
                "temperature".to_string(),
                CellValue::Number(10.0 + ((i * 3) % 25) as f64 + 0.5),
            );
            row
        })
        .collect();
    let (profile, rows) = build(&["day", "temperature"], rows);
    let result = classify(&profile, &rows);

    assert_eq!(result.kind, DatasetKind::TimeSeries);
    assert_eq!(result.column_roles.date_columns, vec!["day".to_string()]);
    let area = result
        .recommendations
        .iter()
        .find(|r| r.chart == ChartKind::Area)
        .expect("an area time series");
    assert_eq!(area.x_column, "day");
    assert_eq!(area.y_column, "temperature");
    assert_eq!(area.aggregation, Aggregation::None);
}

#[test]
fn year_like_numeric_column_becomes_a_line_axis() {
    let rows: Vec<Row> = (0..80)
        .map(|i| {
            let mut row = BTreeMap::new();
            row.insert("year".to_string(), CellValue::Number((2005 + i % 20) as f64));
            row.insert(
                "revenue".to_string(),
                CellValue::Number(100.0 + ((i * 17) % 53) as f64 * 88.25),
            );
            row
        })
        .collect();
    let (profile, rows) = build(&["year", "revenue"], rows);
    let result = classify(&profile, &rows);

    let line = result
        .recommendations
        .iter()
        .find(|r| r.id.starts_with("year-"))
        .expect("a year line recommendation");
    assert_eq!(line.chart, ChartKind::Line);
    assert_eq!(line.x_column, "year");
    assert_eq!(line.title, "Revenue by Year");
}

#[test]
fn correlated_metrics_produce_a_vs_line() {
    let rows: Vec<Row> = (0..100)
        .map(|i| {
            let spread = ((i * 7) % 40) as f64;
            let mut row = BTreeMap::new();
            row.insert("region".to_string(), CellValue::Text(format!("r{}", i % 4)));
            row.insert(
                "cost".to_string(),
                CellValue::Number(50.0 + spread * 110.5 + 0.25),
            );
            row.insert(
                "revenue".to_string(),
                CellValue::Number(120.0 + spread * 160.75 + 0.5),
            );
            row
        })
        .collect();
    let (profile, rows) = build(&["region", "cost", "revenue"], rows);
    let result = classify(&profile, &rows);

    let corr = result
        .recommendations
        .iter()
        .find(|r| r.id.starts_with("corr-"))
        .expect("a correlation recommendation");
    assert_eq!(corr.chart, ChartKind::Line);
    assert_eq!(corr.aggregation, Aggregation::None);
    assert!(corr.description.contains("r=+1"));
}

#[test]
fn classification_is_idempotent() {
    let (profile, rows) = build(&["id", "revenue", "region"], sales_like_rows(150));
    let first = classify(&profile, &rows);
    let second = classify(&profile, &rows);
    assert_eq!(first, second);
}

#[test]
fn empty_dataset_classifies_to_generic_with_no_recommendations() {
    let (profile, rows) = build(&["alpha_field", "beta_field"], vec![]);
    let result = classify(&profile, &rows);

    assert_eq!(result.kind, DatasetKind::Generic);
    assert_eq!(result.confidence, 15);
    assert!(result.recommendations.is_empty());
    assert!(result.column_roles.categorical_columns.is_empty());
    assert!(result.column_roles.target_column.is_none());
}

#[test]
fn recommendations_are_sorted_and_reference_real_columns() {
    let (profile, rows) = build(&["id", "revenue", "region"], sales_like_rows(200));
    let result = classify(&profile, &rows);

    assert!(!result.recommendations.is_empty());
    for pair in result.recommendations.windows(2) {
        assert!(pair[0].priority >= pair[1].priority);
    }
    for rec in &result.recommendations {
        assert!(profile.has_column(&rec.x_column), "unknown x {}", rec.x_column);
        assert!(profile.has_column(&rec.y_column), "unknown y {}", rec.y_column);
    }
}
