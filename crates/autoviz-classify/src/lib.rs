//! Column role inference and chart recommendation engine.
//!
//! Takes a dataset snapshot (per-column profiles plus raw rows) and
//! produces a [`Classification`]: the dataset's archetype label, every
//! column's role (metric, dimension, date, target), and a ranked,
//! validated list of chart recommendations. Pure and synchronous: the
//! same input always yields the same output, and nothing is cached
//! between calls.
//!
//! Malformed or sparse data never fails here. Insufficient data produces
//! neutral scores, empty datasets produce empty rankings, and degenerate
//! recommendations are filtered rather than surfaced as errors.

#![deny(unsafe_code)]

pub mod archetype;
pub mod detect;
pub mod patterns;
pub mod recommend;
pub mod relevance;
pub mod score;

use tracing::debug;

use autoviz_model::{Classification, ColumnRoles, DatasetProfile, Row};

pub use archetype::classify_archetype;
pub use recommend::generate_recommendations;
pub use score::{
    METRIC_INELIGIBLE, RankedColumn, dimension_ranking, metric_ranking, pick_aggregation,
    score_as_dimension, score_as_metric,
};

/// Classify a dataset snapshot.
///
/// The profile's per-column types are authoritative for coercion; rows
/// may be ragged (absent cells count as nulls).
pub fn classify(dataset: &DatasetProfile, rows: &[Row]) -> Classification {
    let (kind, archetype_score) = classify_archetype(dataset);
    let confidence = ((archetype_score * 100.0).round() as u8).min(99);

    let date_columns: Vec<String> = dataset.date_columns().map(|c| c.name.clone()).collect();

    let metric_ranked = metric_ranking(dataset, rows);
    let numeric_columns: Vec<String> = metric_ranked
        .iter()
        .map(|r| r.column.name.clone())
        .collect();
    let target_column = metric_ranked
        .first()
        .filter(|r| r.score > 0.0)
        .map(|r| r.column.name.clone());

    let categorical_columns: Vec<String> = dimension_ranking(dataset, rows)
        .iter()
        .filter(|r| r.score > 0.0)
        .map(|r| r.column.name.clone())
        .collect();

    let recommendations = generate_recommendations(dataset, rows);

    debug!(
        kind = %kind,
        confidence,
        recommendations = recommendations.len(),
        target = target_column.as_deref().unwrap_or("-"),
        "classified dataset"
    );

    Classification {
        kind,
        confidence,
        label: kind.label().to_string(),
        description: kind.description().to_string(),
        suggested_charts: kind
            .suggested_charts()
            .iter()
            .map(|c| (*c).to_string())
            .collect(),
        recommendations,
        column_roles: ColumnRoles {
            date_columns,
            numeric_columns,
            categorical_columns,
            target_column,
        },
    }
}
