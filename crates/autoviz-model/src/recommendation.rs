//! Chart recommendation types emitted by the classification core.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of chart a recommendation proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Area,
    Pie,
    Histogram,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Area => "area",
            ChartKind::Pie => "pie",
            ChartKind::Histogram => "histogram",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the y-column is aggregated per x-column group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    /// Sum per group. For additive quantities (revenue, counts).
    Sum,
    /// Mean per group. For scale-bounded quantities (ratings, percentages)
    /// where summing is meaningless.
    Avg,
    /// Record count per group.
    Count,
    /// Raw values, no grouping.
    None,
}

impl Aggregation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregation::Sum => "sum",
            Aggregation::Avg => "avg",
            Aggregation::Count => "count",
            Aggregation::None => "none",
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully-specified chart proposed by the engine without user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecommendation {
    /// Deterministic id derived from the rule and column pair that
    /// produced the recommendation.
    pub id: String,
    pub chart: ChartKind,
    pub title: String,
    pub description: String,
    /// Grouping/category axis. Must name a column in the dataset.
    pub x_column: String,
    /// Value axis. Must name a column in the dataset.
    pub y_column: String,
    pub aggregation: Aggregation,
    /// Higher is more important. Strictly decreasing in generation order.
    pub priority: i32,
}
