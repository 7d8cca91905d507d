//! Dataset archetype scoring.
//!
//! Scores the whole table against named domain archetypes using aggregate
//! column-name match rates, plus a structural time-series rule. The
//! result labels the dataset for presentation only; it never feeds back
//! into role scoring or recommendation generation.

use autoviz_model::{DatasetKind, DatasetProfile};

use crate::patterns::{
    DEMOGRAPHICS_PATTERNS, FINANCIAL_PATTERNS, SALES_PATTERNS, SURVEY_PATTERNS, match_fraction,
};

/// An archetype must beat this floor or the dataset stays generic.
pub const ARCHETYPE_FLOOR: f64 = 0.15;

/// Score every archetype and pick the best, falling back to
/// [`DatasetKind::Generic`] at the floor score. Ties resolve to the
/// earlier archetype in the fixed evaluation order.
pub fn classify_archetype(dataset: &DatasetProfile) -> (DatasetKind, f64) {
    let names: Vec<&str> = dataset.columns.iter().map(|c| c.name.as_str()).collect();

    let scored = [
        (DatasetKind::Sales, match_fraction(&names, SALES_PATTERNS)),
        (DatasetKind::Survey, match_fraction(&names, SURVEY_PATTERNS)),
        (
            DatasetKind::Financial,
            match_fraction(&names, FINANCIAL_PATTERNS),
        ),
        (
            DatasetKind::Demographics,
            match_fraction(&names, DEMOGRAPHICS_PATTERNS),
        ),
        (DatasetKind::TimeSeries, time_series_score(dataset)),
    ];

    let mut best = (DatasetKind::Generic, ARCHETYPE_FLOOR);
    for (kind, score) in scored {
        if score > best.1 {
            best = (kind, score);
        }
    }
    best
}

/// Structural rule: at least one date column and one numeric column, with
/// the score growing in the numeric share of the table.
fn time_series_score(dataset: &DatasetProfile) -> f64 {
    let date_count = dataset.columns.iter().filter(|c| c.is_date()).count();
    let numeric_count = dataset.columns.iter().filter(|c| c.is_numeric()).count();
    if date_count >= 1 && numeric_count >= 1 {
        0.5 + 0.5 * numeric_count as f64 / dataset.column_count as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use autoviz_model::{ColumnProfile, ColumnType};

    use super::*;

    fn column(name: &str, column_type: ColumnType) -> ColumnProfile {
        ColumnProfile {
            name: name.to_string(),
            column_type,
            unique_count: 10,
            null_count: 0,
            sample_values: vec![],
            numeric: None,
        }
    }

    fn dataset(columns: Vec<ColumnProfile>) -> DatasetProfile {
        DatasetProfile {
            row_count: 100,
            column_count: columns.len(),
            columns,
            source: None,
        }
    }

    #[test]
    fn sales_vocabulary_wins() {
        let ds = dataset(vec![
            column("revenue", ColumnType::Number),
            column("product", ColumnType::Text),
            column("quantity", ColumnType::Number),
            column("notes", ColumnType::Text),
        ]);
        let (kind, score) = classify_archetype(&ds);
        assert_eq!(kind, DatasetKind::Sales);
        assert!(score > 0.5);
    }

    #[test]
    fn date_plus_numeric_scores_time_series() {
        let ds = dataset(vec![
            column("timestamp", ColumnType::Date),
            column("reading_a", ColumnType::Number),
            column("reading_b", ColumnType::Number),
        ]);
        let (kind, score) = classify_archetype(&ds);
        assert_eq!(kind, DatasetKind::TimeSeries);
        // 0.5 + 0.5 * 2/3
        assert!((score - (0.5 + 1.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn unmatched_columns_fall_back_to_generic_at_floor() {
        let ds = dataset(vec![
            column("abc", ColumnType::Text),
            column("def", ColumnType::Text),
        ]);
        let (kind, score) = classify_archetype(&ds);
        assert_eq!(kind, DatasetKind::Generic);
        assert_eq!(score, ARCHETYPE_FLOOR);
    }

    #[test]
    fn empty_dataset_is_generic() {
        let ds = dataset(vec![]);
        let (kind, _) = classify_archetype(&ds);
        assert_eq!(kind, DatasetKind::Generic);
    }
}
