//! Role scoring: how desirable each column is as a metric or a dimension.
//!
//! Scores are additive rule lists, not learned weights. Each rule encodes
//! one domain intuition (identifiers are not metrics, low-cardinality
//! strings make good group-by keys, years are timelines not totals) and
//! contributes a fixed delta, so a score is exactly reproducible from its
//! inputs.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use autoviz_model::{Aggregation, CellValue, ColumnProfile, DatasetProfile, Row};

use crate::detect::{is_likely_sequential, looks_like_flag, looks_like_url_or_path, looks_like_year};
use crate::patterns::{
    has_avg_keyword, has_dimension_keyword, has_metric_keyword, is_freetext_name,
    is_identifier_name, normalize_name,
};
use crate::relevance::entropy;

/// Metric score for columns that can never be metrics (non-numeric).
pub const METRIC_INELIGIBLE: f64 = f64::NEG_INFINITY;

/// A column together with its role score. Higher is better.
#[derive(Debug, Clone, Copy)]
pub struct RankedColumn<'a> {
    pub column: &'a ColumnProfile,
    pub score: f64,
}

/// Score a column as a metric candidate.
///
/// Non-numeric columns are ineligible and score [`METRIC_INELIGIBLE`].
pub fn score_as_metric(column: &ColumnProfile, dataset: &DatasetProfile, rows: &[Row]) -> f64 {
    if !column.is_numeric() {
        return METRIC_INELIGIBLE;
    }
    let norm = normalize_name(&column.name);
    let mut score = 0.0;

    // Name heuristics
    if is_identifier_name(&norm) {
        score -= 50.0;
    }
    if is_freetext_name(&norm) {
        score -= 30.0;
    }
    if has_metric_keyword(&norm) {
        score += 40.0;
    }

    // Disguised semantics: years are dimensions, flags are not useful
    // quantities
    if looks_like_year(column) {
        score -= 35.0;
    }
    if looks_like_flag(column, dataset.row_count) {
        score -= 25.0;
    }
    if looks_like_url_or_path(column) {
        score -= 40.0;
    }

    // Statistical shape
    if let Some(stats) = column.numeric {
        if stats.mean != 0.0 && stats.std_dev != 0.0 {
            let cv = (stats.std_dev / stats.mean).abs();
            if (0.1..=2.0).contains(&cv) {
                score += 15.0;
            } else if cv > 5.0 {
                score -= 5.0;
            }
        }
        if stats.std_dev > 0.0 {
            score += 5.0;
        }
        if stats.min >= 0.0 {
            score += 5.0;
        }
        if stats.min == stats.max {
            score -= 40.0;
        }
    }

    let range = column.range();
    if range > 10.0 {
        score += 5.0;
    }
    if range > 100.0 {
        score += 5.0;
    }
    if range > 1000.0 {
        score += 5.0;
    }

    // Decimal sample values reward prices and rates over raw counts
    if column.sample_numbers().any(|n| n.fract() != 0.0) {
        score += 8.0;
    }

    // Cardinality shape: encoded categories and identifiers
    if column.unique_count <= 5 && dataset.row_count > 20 {
        score -= 15.0;
    }
    if column.unique_count == dataset.row_count {
        score -= 20.0;
    }
    if is_likely_sequential(rows, &column.name) {
        score -= 30.0;
    }

    score
}

/// Score a column as a dimension (group-by) candidate. Any type is
/// eligible.
///
/// String columns that are unique per row are rejected outright (names
/// and free-form ids), skipping every later bonus; this precedence is
/// intentional.
pub fn score_as_dimension(column: &ColumnProfile, dataset: &DatasetProfile, rows: &[Row]) -> f64 {
    let norm = normalize_name(&column.name);
    let mut score = 0.0;

    if is_identifier_name(&norm) {
        score -= 30.0;
    }
    if looks_like_url_or_path(column) {
        score -= 40.0;
    }
    if has_dimension_keyword(&norm) {
        score += 40.0;
    }

    if column.is_text() {
        if column.unique_count == dataset.row_count {
            return score - 40.0;
        }
        score += 10.0;

        // Cardinality sweet spot for grouping
        if (2..=30).contains(&column.unique_count) {
            score += 30.0;
        } else if column.unique_count > 30 && column.unique_count <= 100 {
            score += 10.0;
        } else if column.unique_count > 100 {
            score -= 10.0;
        }

        let sample_strings: Vec<&str> = column.sample_strings().collect();
        if !sample_strings.is_empty() {
            let avg_len = sample_strings
                .iter()
                .map(|s| s.chars().count())
                .sum::<usize>() as f64
                / sample_strings.len() as f64;
            if avg_len <= 20.0 {
                score += 10.0;
            } else if avg_len > 50.0 {
                score -= 20.0;
            }
        }

        // Repetition inside the sample prefix means values group well
        let distinct_in_sample = column
            .sample_values
            .iter()
            .map(CellValue::label)
            .collect::<BTreeSet<_>>()
            .len();
        let repetition = 1.0 - distinct_in_sample as f64 / column.sample_values.len().max(1) as f64;
        if repetition > 0.3 {
            score += 15.0;
        }

        // Near-uniform distributions are more interesting to group by
        let h = entropy(rows, &column.name);
        let max_h = (column.unique_count.max(1) as f64).log2();
        if max_h > 0.0 && h / max_h > 0.7 {
            score += 10.0;
        }
    }

    if column.is_numeric() && looks_like_year(column) {
        score += 35.0;
    }
    if column.is_date() {
        score += 25.0;
    }
    // Small numeric scales (1-5 ratings) group well unless they are flags
    if column.is_numeric()
        && column.unique_count <= 10
        && !looks_like_flag(column, dataset.row_count)
    {
        score += 15.0;
    }

    score
}

/// Choose how a metric should be aggregated per group.
///
/// Average-flavored names (rating, score, percentage, ...) and
/// scale-bounded ranges average; additive quantities sum.
pub fn pick_aggregation(column: &ColumnProfile) -> Aggregation {
    let norm = normalize_name(&column.name);
    if has_avg_keyword(&norm) {
        return Aggregation::Avg;
    }
    let range = column.range();
    if let Some(stats) = column.numeric {
        if range > 0.0 && range <= 100.0 && stats.min >= 0.0 && stats.max <= 100.0 {
            return Aggregation::Avg;
        }
        if range > 0.0 && range <= 10.0 && stats.min >= 0.0 {
            return Aggregation::Avg;
        }
    }
    Aggregation::Sum
}

/// All eligible columns ranked as metrics, best first. Ties keep source
/// column order.
pub fn metric_ranking<'a>(dataset: &'a DatasetProfile, rows: &[Row]) -> Vec<RankedColumn<'a>> {
    let mut ranking: Vec<RankedColumn<'a>> = dataset
        .columns
        .iter()
        .map(|column| RankedColumn {
            column,
            score: score_as_metric(column, dataset, rows),
        })
        .filter(|ranked| ranked.score > METRIC_INELIGIBLE)
        .collect();
    sort_descending(&mut ranking);
    ranking
}

/// All columns ranked as dimensions, best first. Ties keep source column
/// order.
pub fn dimension_ranking<'a>(dataset: &'a DatasetProfile, rows: &[Row]) -> Vec<RankedColumn<'a>> {
    let mut ranking: Vec<RankedColumn<'a>> = dataset
        .columns
        .iter()
        .map(|column| RankedColumn {
            column,
            score: score_as_dimension(column, dataset, rows),
        })
        .collect();
    sort_descending(&mut ranking);
    ranking
}

fn sort_descending(ranking: &mut [RankedColumn<'_>]) {
    ranking.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}
