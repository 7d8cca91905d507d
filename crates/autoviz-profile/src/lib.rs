//! Column statistics supplier.
//!
//! Builds [`DatasetProfile`]s from raw rows: per-column type inference,
//! distinct/null counts, a small sample prefix, and numeric summary
//! statistics. The classification core consumes these profiles; it never
//! computes them itself.

#![deny(unsafe_code)]

use std::collections::BTreeSet;

use autoviz_model::{
    CellValue, ColumnProfile, ColumnType, DatasetProfile, NumericSummary, Row, SourceInfo,
};

mod dates;

pub use dates::looks_like_date;

/// How many leading non-null values type inference inspects.
const TYPE_SAMPLE: usize = 100;

/// How many leading non-null values are kept as the sample prefix.
const SAMPLE_VALUES: usize = 5;

/// Profile a dataset snapshot. `headers` fixes the column order; rows may
/// omit columns (absent cells count as nulls).
pub fn profile_rows(headers: &[String], rows: &[Row], source: Option<SourceInfo>) -> DatasetProfile {
    let columns: Vec<ColumnProfile> = headers
        .iter()
        .map(|name| profile_column(name, rows))
        .collect();

    DatasetProfile {
        row_count: rows.len(),
        column_count: columns.len(),
        columns,
        source,
    }
}

fn profile_column(name: &str, rows: &[Row]) -> ColumnProfile {
    let values: Vec<&CellValue> = rows
        .iter()
        .map(|row| row.get(name).unwrap_or(&CellValue::Null))
        .collect();
    let non_null: Vec<&CellValue> = values.iter().copied().filter(|v| !v.is_null()).collect();

    let column_type = detect_column_type(&non_null);

    let unique: BTreeSet<String> = non_null.iter().map(|v| v.label()).collect();

    let sample_values: Vec<CellValue> = non_null
        .iter()
        .take(SAMPLE_VALUES)
        .map(|v| match column_type {
            ColumnType::Number => v
                .as_f64()
                .map(CellValue::Number)
                .unwrap_or_else(|| (*v).clone()),
            _ => CellValue::Text(v.label()),
        })
        .collect();

    let numeric = if column_type == ColumnType::Number {
        numeric_summary(&non_null)
    } else {
        None
    };

    ColumnProfile {
        name: name.to_string(),
        column_type,
        unique_count: unique.len(),
        null_count: values.len() - non_null.len(),
        sample_values,
        numeric,
    }
}

/// Infer the column type from the first hundred non-null values.
///
/// Thresholds are ratios over the inspected prefix: boolean-shaped > 0.9,
/// date-shaped > 0.7, numeric > 0.8, otherwise text.
fn detect_column_type(non_null: &[&CellValue]) -> ColumnType {
    if non_null.is_empty() {
        return ColumnType::Text;
    }

    let mut bool_count = 0usize;
    let mut date_count = 0usize;
    let mut num_count = 0usize;
    let inspected = non_null.len().min(TYPE_SAMPLE);

    for value in &non_null[..inspected] {
        let text = value.label();
        let text = text.trim();

        if matches!(text, "true" | "false" | "0" | "1") {
            bool_count += 1;
        }
        if text.parse::<f64>().is_ok() {
            num_count += 1;
        }
        if looks_like_date(text) {
            date_count += 1;
        }
    }

    let total = inspected as f64;
    if bool_count as f64 / total > 0.9 {
        ColumnType::Boolean
    } else if date_count as f64 / total > 0.7 {
        ColumnType::Date
    } else if num_count as f64 / total > 0.8 {
        ColumnType::Number
    } else {
        ColumnType::Text
    }
}

/// Min/max/mean/median and population standard deviation over the values
/// that coerce to numbers. Mean, median, and stddev are rounded to two
/// decimals; min and max are exact.
fn numeric_summary(non_null: &[&CellValue]) -> Option<NumericSummary> {
    let mut nums: Vec<f64> = non_null.iter().filter_map(|v| v.as_f64()).collect();
    if nums.is_empty() {
        return None;
    }

    nums.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = nums.len();
    let sum: f64 = nums.iter().sum();
    let mean = sum / n as f64;
    let median = if n % 2 == 0 {
        (nums[n / 2 - 1] + nums[n / 2]) / 2.0
    } else {
        nums[n / 2]
    };
    let variance = nums.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;

    Some(NumericSummary {
        min: nums[0],
        max: nums[n - 1],
        mean: round2(mean),
        median: round2(median),
        std_dev: round2(variance.sqrt()),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, CellValue)]) -> Row {
        cells
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn profiles_numeric_column() {
        let rows: Vec<Row> = (1..=5)
            .map(|i| row(&[("amount", CellValue::Number(i as f64 * 10.0))]))
            .collect();
        let profile = profile_rows(&headers(&["amount"]), &rows, None);

        let col = &profile.columns[0];
        assert_eq!(col.column_type, ColumnType::Number);
        assert_eq!(col.unique_count, 5);
        assert_eq!(col.null_count, 0);

        let stats = col.numeric.expect("numeric summary");
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 50.0);
        assert_eq!(stats.mean, 30.0);
        assert_eq!(stats.median, 30.0);
    }

    #[test]
    fn detects_date_columns() {
        let rows: Vec<Row> = ["2024-01-01", "2024-01-02", "2024-02-15", "2024-03-01"]
            .iter()
            .map(|d| row(&[("when", CellValue::Text((*d).to_string()))]))
            .collect();
        let profile = profile_rows(&headers(&["when"]), &rows, None);
        assert_eq!(profile.columns[0].column_type, ColumnType::Date);
        assert!(profile.columns[0].numeric.is_none());
    }

    #[test]
    fn detects_boolean_column() {
        let rows: Vec<Row> = [true, false, true, true]
            .iter()
            .map(|b| row(&[("flag", CellValue::Boolean(*b))]))
            .collect();
        let profile = profile_rows(&headers(&["flag"]), &rows, None);
        assert_eq!(profile.columns[0].column_type, ColumnType::Boolean);
    }

    #[test]
    fn counts_nulls_and_absent_cells() {
        let rows = vec![
            row(&[("a", CellValue::Number(1.0)), ("b", CellValue::Null)]),
            row(&[("a", CellValue::Number(2.0))]),
            row(&[("a", CellValue::Null), ("b", "x".into())]),
        ];
        let profile = profile_rows(&headers(&["a", "b"]), &rows, None);
        assert_eq!(profile.columns[0].null_count, 1);
        assert_eq!(profile.columns[1].null_count, 2);
        assert_eq!(profile.row_count, 3);
    }

    #[test]
    fn sample_prefix_is_capped() {
        let rows: Vec<Row> = (0..20)
            .map(|i| row(&[("name", CellValue::Text(format!("v{i}")))]))
            .collect();
        let profile = profile_rows(&headers(&["name"]), &rows, None);
        assert_eq!(profile.columns[0].sample_values.len(), 5);
        assert_eq!(profile.columns[0].unique_count, 20);
    }

    #[test]
    fn all_null_column_is_text_without_stats() {
        let rows = vec![row(&[("empty", CellValue::Null)]); 3];
        let profile = profile_rows(&headers(&["empty"]), &rows, None);
        let col = &profile.columns[0];
        assert_eq!(col.column_type, ColumnType::Text);
        assert_eq!(col.unique_count, 0);
        assert!(col.numeric.is_none());
    }

    #[test]
    fn empty_dataset_profiles_cleanly() {
        let profile = profile_rows(&headers(&["a"]), &[], None);
        assert_eq!(profile.row_count, 0);
        assert_eq!(profile.columns[0].unique_count, 0);
    }
}
