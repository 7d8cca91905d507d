//! Entropy, mutual information, and correlation over raw rows.
//!
//! These rank which column pairings are worth visualizing. Name matching
//! alone cannot tell that `region` explains `revenue` variance far better
//! than `year` does; mutual information can. All functions return a
//! neutral 0 on insufficient data instead of failing.

use std::collections::BTreeMap;

use autoviz_model::{Row, cell_f64, cell_label};

/// Number of equal-width bins a metric is discretized into for MI.
pub const MI_BINS: usize = 5;

/// Minimum numeric values a metric needs before MI is computed.
pub const MI_MIN_VALUES: usize = 20;

/// Correlation is estimated over at most this many leading rows.
pub const CORRELATION_ROW_CAP: usize = 500;

/// Minimum valid pairs before a correlation is reported.
pub const CORRELATION_MIN_PAIRS: usize = 10;

/// Shannon entropy (base 2) of a column's value distribution across all
/// rows. Missing values count as one empty-label category.
pub fn entropy(rows: &[Row], column: &str) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for row in rows {
        *counts.entry(cell_label(row, column)).or_insert(0) += 1;
    }
    let total = rows.len() as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Mutual information between a dimension's raw values and a metric's
/// binned values, in bits, rounded to three decimals.
///
/// The metric is discretized into `bins` equal-width bins spanning its
/// non-null range; bin boundaries depend only on the metric, never on the
/// dimension. Returns 0 when fewer than [`MI_MIN_VALUES`] numeric values
/// exist.
pub fn mutual_information(rows: &[Row], dimension: &str, metric: &str, bins: usize) -> f64 {
    let metric_values: Vec<f64> = rows.iter().filter_map(|row| cell_f64(row, metric)).collect();
    if metric_values.len() < MI_MIN_VALUES || bins == 0 {
        return 0.0;
    }

    let min = metric_values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = metric_values
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let mut bin_width = (max - min) / bins as f64;
    if bin_width == 0.0 {
        bin_width = 1.0;
    }

    let mut joint: BTreeMap<(String, usize), usize> = BTreeMap::new();
    let mut dimension_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut bin_counts: BTreeMap<usize, usize> = BTreeMap::new();
    let mut total = 0usize;

    for row in rows {
        let Some(value) = cell_f64(row, metric) else {
            continue;
        };
        let label = cell_label(row, dimension);
        let bin = (((value - min) / bin_width).floor() as usize).min(bins - 1);

        *joint.entry((label.clone(), bin)).or_insert(0) += 1;
        *dimension_counts.entry(label).or_insert(0) += 1;
        *bin_counts.entry(bin).or_insert(0) += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let mut mi = 0.0;
    for ((label, bin), count) in &joint {
        let p_xy = *count as f64 / total;
        let p_x = dimension_counts[label] as f64 / total;
        let p_y = bin_counts[bin] as f64 / total;
        if p_x > 0.0 && p_y > 0.0 && p_xy > 0.0 {
            mi += p_xy * (p_xy / (p_x * p_y)).log2();
        }
    }
    round3(mi)
}

/// Pearson product-moment correlation over up to the first
/// [`CORRELATION_ROW_CAP`] rows where both columns are numeric, rounded
/// to two decimals. Returns 0 with fewer than [`CORRELATION_MIN_PAIRS`]
/// valid pairs or zero variance.
pub fn correlation(rows: &[Row], column_a: &str, column_b: &str) -> f64 {
    let mut pairs: Vec<(f64, f64)> = Vec::new();
    for row in rows.iter().take(CORRELATION_ROW_CAP) {
        if let (Some(a), Some(b)) = (cell_f64(row, column_a), cell_f64(row, column_b)) {
            pairs.push((a, b));
        }
    }
    if pairs.len() < CORRELATION_MIN_PAIRS {
        return 0.0;
    }

    let n = pairs.len() as f64;
    let sum_a: f64 = pairs.iter().map(|(a, _)| a).sum();
    let sum_b: f64 = pairs.iter().map(|(_, b)| b).sum();
    let sum_ab: f64 = pairs.iter().map(|(a, b)| a * b).sum();
    let sum_a2: f64 = pairs.iter().map(|(a, _)| a * a).sum();
    let sum_b2: f64 = pairs.iter().map(|(_, b)| b * b).sum();

    let numerator = n * sum_ab - sum_a * sum_b;
    let denominator = ((n * sum_a2 - sum_a * sum_a) * (n * sum_b2 - sum_b * sum_b)).sqrt();
    if denominator == 0.0 || denominator.is_nan() {
        0.0
    } else {
        round2(numerator / denominator)
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
