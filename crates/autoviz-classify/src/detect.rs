//! Data-pattern detectors.
//!
//! Column names are unreliable: a column named `year_established` and one
//! named `x3` should both be recognized as years if they behave like
//! years. These predicates inspect the column statistics and row values
//! instead of the name. All are deterministic and side-effect free.

use autoviz_model::{ColumnProfile, Row, cell_f64};

/// How many leading rows the sequential-id detector inspects.
const SEQUENTIAL_SAMPLE: usize = 100;

/// Minimum numeric values required before judging sequentiality.
const SEQUENTIAL_MIN_VALUES: usize = 10;

/// Fraction of consecutive steps that must ascend for a sequential id.
const SEQUENTIAL_ASCENDING_RATIO: f64 = 0.9;

/// A numeric column whose values sit in a plausible calendar range with
/// low spread: a year, not a quantity.
pub fn looks_like_year(column: &ColumnProfile) -> bool {
    if !column.is_numeric() {
        return false;
    }
    let Some(stats) = column.numeric else {
        return false;
    };
    stats.min >= 1900.0
        && stats.max <= 2100.0
        && column.unique_count > 3
        && (stats.max - stats.min) <= 200.0
        && stats.std_dev < 50.0
}

/// A numeric column with at most two distinct values among more than ten
/// rows: a boolean flag in disguise.
pub fn looks_like_flag(column: &ColumnProfile, row_count: usize) -> bool {
    column.is_numeric() && column.unique_count <= 2 && row_count > 10
}

/// Values ascend almost monotonically across the leading rows: an
/// auto-increment key, not a measurement.
pub fn is_likely_sequential(rows: &[Row], column: &str) -> bool {
    let values: Vec<f64> = rows
        .iter()
        .take(SEQUENTIAL_SAMPLE)
        .filter_map(|row| cell_f64(row, column))
        .collect();
    if values.len() < SEQUENTIAL_MIN_VALUES {
        return false;
    }

    let ascending = values.windows(2).filter(|pair| pair[1] > pair[0]).count();
    ascending as f64 / (values.len() - 1) as f64 > SEQUENTIAL_ASCENDING_RATIO
}

/// Sampled string values look like URLs or filesystem paths.
pub fn looks_like_url_or_path(column: &ColumnProfile) -> bool {
    if !column.is_text() {
        return false;
    }
    column
        .sample_strings()
        .any(|s| s.starts_with("http") || s.starts_with('/') || s.contains("://"))
}
