//! Recommendation generation: candidate assembly, validation, ranking.
//!
//! Categories are emitted in a fixed order with a priority counter that
//! starts at 100 and decrements per recommendation, so earlier categories
//! always outrank later ones: MI-ranked bars, date time series, year
//! lines, low-cardinality pies, correlated-metric lines, histograms.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::debug;

use autoviz_model::{
    Aggregation, ChartKind, ChartRecommendation, ColumnProfile, DatasetProfile, Row,
};

use crate::detect::looks_like_year;
use crate::patterns::title_case;
use crate::relevance::{MI_BINS, correlation, mutual_information};
use crate::score::{RankedColumn, dimension_ranking, metric_ranking, pick_aggregation};

/// Top-N cuts for each generation step. Tunable constants, not
/// invariants.
const TOP_METRICS: usize = 5;
const TOP_DIMENSIONS: usize = 5;
const MI_PAIR_LIMIT: usize = 6;
const DATE_METRIC_LIMIT: usize = 3;
const YEAR_METRIC_LIMIT: usize = 2;
const CORRELATED_METRIC_POOL: usize = 4;
const CORRELATION_PAIR_LIMIT: usize = 2;
const HISTOGRAM_LIMIT: usize = 2;

/// Pie charts are only proposed for dimensions in this cardinality band.
const PIE_MIN_GROUPS: usize = 2;
const PIE_MAX_GROUPS: usize = 12;

/// Validation drops pies whose dimension exceeds this many groups.
const PIE_VALIDATION_MAX_GROUPS: usize = 50;

/// Minimum |r| before a metric pair is considered correlated.
const MIN_CORRELATION: f64 = 0.3;

const BASE_PRIORITY: i32 = 100;

/// Generate the validated, priority-ranked recommendation list for a
/// dataset snapshot.
pub fn generate_recommendations(dataset: &DatasetProfile, rows: &[Row]) -> Vec<ChartRecommendation> {
    let metric_ranked = metric_ranking(dataset, rows);
    let dimension_ranked = dimension_ranking(dataset, rows);

    let mut top_metrics: Vec<RankedColumn<'_>> = metric_ranked
        .iter()
        .filter(|r| r.score > 0.0)
        .take(TOP_METRICS)
        .copied()
        .collect();
    // Ambiguous schema: fall back to the best raw numeric column rather
    // than producing nothing
    if top_metrics.is_empty() && !metric_ranked.is_empty() {
        top_metrics.push(metric_ranked[0]);
    }
    let top_dimensions: Vec<RankedColumn<'_>> = dimension_ranked
        .iter()
        .filter(|r| r.score > 0.0)
        .take(TOP_DIMENSIONS)
        .copied()
        .collect();

    debug!(
        metrics = top_metrics.len(),
        dimensions = top_dimensions.len(),
        "ranked candidate columns"
    );

    let mut recommendations = Vec::new();
    let mut priority = BASE_PRIORITY;

    push_mi_bars(
        rows,
        &top_dimensions,
        &top_metrics,
        &mut recommendations,
        &mut priority,
    );
    push_time_series(dataset, &top_metrics, &mut recommendations, &mut priority);
    push_year_lines(&top_dimensions, &top_metrics, &mut recommendations, &mut priority);
    push_pies(&top_dimensions, &top_metrics, &mut recommendations, &mut priority);
    push_correlations(rows, &top_metrics, &mut recommendations, &mut priority);
    push_histograms(&top_metrics, &mut recommendations, &mut priority);

    let before = recommendations.len();
    recommendations.retain(|rec| is_valid(rec, dataset));
    if recommendations.len() < before {
        debug!(
            dropped = before - recommendations.len(),
            "filtered degenerate recommendations"
        );
    }

    recommendations.sort_by(|a, b| b.priority.cmp(&a.priority));
    recommendations
}

/// Mutual-information-ranked dimension x metric bar charts.
fn push_mi_bars(
    rows: &[Row],
    top_dimensions: &[RankedColumn<'_>],
    top_metrics: &[RankedColumn<'_>],
    out: &mut Vec<ChartRecommendation>,
    priority: &mut i32,
) {
    struct MiPair<'a> {
        dimension: &'a ColumnProfile,
        metric: &'a ColumnProfile,
        mi: f64,
        aggregation: Aggregation,
    }

    let mut pairs: Vec<MiPair<'_>> = Vec::new();
    for dim in top_dimensions
        .iter()
        .filter(|d| d.column.is_text() || looks_like_year(d.column))
    {
        for metric in top_metrics {
            let mi = mutual_information(rows, &dim.column.name, &metric.column.name, MI_BINS);
            pairs.push(MiPair {
                dimension: dim.column,
                metric: metric.column,
                mi,
                aggregation: pick_aggregation(metric.column),
            });
        }
    }
    pairs.sort_by(|a, b| b.mi.partial_cmp(&a.mi).unwrap_or(Ordering::Equal));

    let mut used = BTreeSet::new();
    for pair in pairs.iter().take(MI_PAIR_LIMIT) {
        if !used.insert((pair.dimension.name.clone(), pair.metric.name.clone())) {
            continue;
        }
        let agg_label = aggregation_label(pair.aggregation);
        let metric_title = title_case(&pair.metric.name);
        let dim_title = title_case(&pair.dimension.name);
        out.push(ChartRecommendation {
            id: format!("mi-bar-{}-{}", pair.dimension.name, pair.metric.name),
            chart: ChartKind::Bar,
            title: format!("{agg_label} {metric_title} by {dim_title}"),
            description: format!(
                "{agg_label} {metric_title} grouped by {dim_title} (MI: {:.2})",
                pair.mi
            ),
            x_column: pair.dimension.name.clone(),
            y_column: pair.metric.name.clone(),
            aggregation: pair.aggregation,
            priority: take(priority),
        });
    }
}

/// Raw time series over every date column for the leading metrics.
fn push_time_series(
    dataset: &DatasetProfile,
    top_metrics: &[RankedColumn<'_>],
    out: &mut Vec<ChartRecommendation>,
    priority: &mut i32,
) {
    for date_column in dataset.date_columns() {
        for metric in top_metrics.iter().take(DATE_METRIC_LIMIT) {
            let metric_title = title_case(&metric.column.name);
            out.push(ChartRecommendation {
                id: format!("ts-{}-{}", date_column.name, metric.column.name),
                chart: ChartKind::Area,
                title: format!("{metric_title} Over {}", title_case(&date_column.name)),
                description: format!("Trend of {metric_title} over time"),
                x_column: date_column.name.clone(),
                y_column: metric.column.name.clone(),
                aggregation: Aggregation::None,
                priority: take(priority),
            });
        }
    }
}

/// Year-like numeric dimensions as a time axis.
fn push_year_lines(
    top_dimensions: &[RankedColumn<'_>],
    top_metrics: &[RankedColumn<'_>],
    out: &mut Vec<ChartRecommendation>,
    priority: &mut i32,
) {
    for year_dim in top_dimensions.iter().filter(|d| looks_like_year(d.column)) {
        for metric in top_metrics.iter().take(YEAR_METRIC_LIMIT) {
            let year_title = title_case(&year_dim.column.name);
            out.push(ChartRecommendation {
                id: format!("year-{}-{}", year_dim.column.name, metric.column.name),
                chart: ChartKind::Line,
                title: format!("{} by {year_title}", title_case(&metric.column.name)),
                description: format!("Trend across {year_title}"),
                x_column: year_dim.column.name.clone(),
                y_column: metric.column.name.clone(),
                aggregation: pick_aggregation(metric.column),
                priority: take(priority),
            });
        }
    }
}

/// Share-of-records pies for low-cardinality string dimensions, plus a
/// value-weighted pie against the best metric when one exists.
fn push_pies(
    top_dimensions: &[RankedColumn<'_>],
    top_metrics: &[RankedColumn<'_>],
    out: &mut Vec<ChartRecommendation>,
    priority: &mut i32,
) {
    for dim in top_dimensions.iter().filter(|d| {
        d.column.is_text() && (PIE_MIN_GROUPS..=PIE_MAX_GROUPS).contains(&d.column.unique_count)
    }) {
        let dim_title = title_case(&dim.column.name);
        out.push(ChartRecommendation {
            id: format!("pie-{}", dim.column.name),
            chart: ChartKind::Pie,
            title: format!("{dim_title} Distribution"),
            description: format!("Share of records by {dim_title}"),
            x_column: dim.column.name.clone(),
            y_column: dim.column.name.clone(),
            aggregation: Aggregation::Count,
            priority: take(priority),
        });

        if let Some(best) = top_metrics.first() {
            let aggregation = pick_aggregation(best.column);
            let metric_title = title_case(&best.column.name);
            out.push(ChartRecommendation {
                id: format!("pie-val-{}-{}", dim.column.name, best.column.name),
                chart: ChartKind::Pie,
                title: format!("{dim_title} by {metric_title}"),
                description: format!(
                    "{} {metric_title} per {dim_title}",
                    aggregation_label(aggregation)
                ),
                x_column: dim.column.name.clone(),
                y_column: best.column.name.clone(),
                aggregation,
                priority: take(priority),
            });
        }
    }
}

/// Strongly correlated metric pairs as paired line charts.
fn push_correlations(
    rows: &[Row],
    top_metrics: &[RankedColumn<'_>],
    out: &mut Vec<ChartRecommendation>,
    priority: &mut i32,
) {
    if top_metrics.len() < 2 {
        return;
    }
    let pool = top_metrics.len().min(CORRELATED_METRIC_POOL);
    let mut pairs: Vec<(&ColumnProfile, &ColumnProfile, f64)> = Vec::new();
    for i in 0..pool {
        for j in (i + 1)..pool {
            let r = correlation(rows, &top_metrics[i].column.name, &top_metrics[j].column.name);
            if r.abs() > MIN_CORRELATION {
                pairs.push((top_metrics[i].column, top_metrics[j].column, r));
            }
        }
    }
    pairs.sort_by(|a, b| b.2.abs().partial_cmp(&a.2.abs()).unwrap_or(Ordering::Equal));

    for (a, b, r) in pairs.iter().take(CORRELATION_PAIR_LIMIT) {
        let sign = if *r > 0.0 { "+" } else { "" };
        out.push(ChartRecommendation {
            id: format!("corr-{}-{}", a.name, b.name),
            chart: ChartKind::Line,
            title: format!("{} vs {}", title_case(&a.name), title_case(&b.name)),
            description: format!("Correlated (r={sign}{r})"),
            x_column: a.name.clone(),
            y_column: b.name.clone(),
            aggregation: Aggregation::None,
            priority: take(priority),
        });
    }
}

/// Frequency distributions for the leading metrics.
fn push_histograms(
    top_metrics: &[RankedColumn<'_>],
    out: &mut Vec<ChartRecommendation>,
    priority: &mut i32,
) {
    for metric in top_metrics.iter().take(HISTOGRAM_LIMIT) {
        let metric_title = title_case(&metric.column.name);
        out.push(ChartRecommendation {
            id: format!("hist-{}", metric.column.name),
            chart: ChartKind::Histogram,
            title: format!("{metric_title} Distribution"),
            description: format!("Frequency distribution of {metric_title}"),
            x_column: metric.column.name.clone(),
            y_column: metric.column.name.clone(),
            aggregation: Aggregation::None,
            priority: take(priority),
        });
    }
}

/// Validation: both axes must exist, bar/pie dimensions need at least two
/// groups, pies cannot exceed the group cap.
fn is_valid(rec: &ChartRecommendation, dataset: &DatasetProfile) -> bool {
    let Some(x_column) = dataset.column(&rec.x_column) else {
        return false;
    };
    if !dataset.has_column(&rec.y_column) {
        return false;
    }
    if matches!(rec.chart, ChartKind::Bar | ChartKind::Pie) && x_column.unique_count < 2 {
        return false;
    }
    if rec.chart == ChartKind::Pie && x_column.unique_count > PIE_VALIDATION_MAX_GROUPS {
        return false;
    }
    true
}

fn aggregation_label(aggregation: Aggregation) -> &'static str {
    if aggregation == Aggregation::Avg {
        "Average"
    } else {
        "Total"
    }
}

/// Use the current priority and decrement for the next recommendation.
fn take(priority: &mut i32) -> i32 {
    let current = *priority;
    *priority -= 1;
    current
}
