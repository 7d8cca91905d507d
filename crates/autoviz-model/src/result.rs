//! Classification output: dataset archetype, column roles, and the ranked
//! recommendation list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::recommendation::ChartRecommendation;

/// Named dataset archetype. Used only for labeling and presentation; column
/// role decisions and recommendation generation do not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Sales,
    #[serde(rename = "timeseries")]
    TimeSeries,
    Survey,
    Financial,
    Demographics,
    Generic,
}

impl DatasetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Sales => "sales",
            DatasetKind::TimeSeries => "timeseries",
            DatasetKind::Survey => "survey",
            DatasetKind::Financial => "financial",
            DatasetKind::Demographics => "demographics",
            DatasetKind::Generic => "generic",
        }
    }

    /// Display label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            DatasetKind::Sales => "📊 Sales & Revenue",
            DatasetKind::TimeSeries => "📈 Time Series",
            DatasetKind::Survey => "📋 Survey & Feedback",
            DatasetKind::Financial => "💰 Financial",
            DatasetKind::Demographics => "👥 Demographics",
            DatasetKind::Generic => "📑 General Analysis",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DatasetKind::Sales => "Revenue trends, product performance, and business KPIs",
            DatasetKind::TimeSeries => "Temporal trends, patterns, and seasonal analysis",
            DatasetKind::Survey => "Response distributions, satisfaction scores, and sentiment",
            DatasetKind::Financial => "Market data, portfolio analysis, and financial metrics",
            DatasetKind::Demographics => {
                "Population statistics, distributions, and socioeconomic data"
            }
            DatasetKind::Generic => "Comprehensive statistical overview and data exploration",
        }
    }

    /// Chart families a dashboard for this archetype typically opens with.
    /// Purely presentational; includes families the engine itself never
    /// emits (kpi, radar, scatter).
    pub fn suggested_charts(&self) -> &'static [&'static str] {
        match self {
            DatasetKind::Sales => &["line", "bar", "pie", "kpi"],
            DatasetKind::TimeSeries => &["line", "area", "bar", "kpi"],
            DatasetKind::Survey => &["bar", "pie", "kpi", "radar"],
            DatasetKind::Financial => &["line", "bar", "kpi", "area"],
            DatasetKind::Demographics => &["bar", "pie", "kpi", "histogram"],
            DatasetKind::Generic => &["bar", "pie", "kpi", "scatter"],
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Column role assignments derived from metric and dimension scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnRoles {
    /// Date-typed columns in source order.
    pub date_columns: Vec<String>,
    /// Numeric columns ranked best-metric first (all eligible columns,
    /// including negatively scored ones).
    pub numeric_columns: Vec<String>,
    /// Dimension-ranked columns with strictly positive scores.
    pub categorical_columns: Vec<String>,
    /// Best default target metric, when one scores positively.
    pub target_column: Option<String>,
}

/// Result of one classification pass over a dataset snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub kind: DatasetKind,
    /// 0-99.
    pub confidence: u8,
    pub label: String,
    pub description: String,
    pub suggested_charts: Vec<String>,
    /// Sorted by priority descending.
    pub recommendations: Vec<ChartRecommendation>,
    pub column_roles: ColumnRoles,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_serde() {
        let json = serde_json::to_string(&DatasetKind::TimeSeries).expect("serialize kind");
        assert_eq!(json, "\"timeseries\"");
        let back: DatasetKind = serde_json::from_str(&json).expect("deserialize kind");
        assert_eq!(back, DatasetKind::TimeSeries);
    }

    #[test]
    fn every_kind_has_presentation_config() {
        for kind in [
            DatasetKind::Sales,
            DatasetKind::TimeSeries,
            DatasetKind::Survey,
            DatasetKind::Financial,
            DatasetKind::Demographics,
            DatasetKind::Generic,
        ] {
            assert!(!kind.label().is_empty());
            assert!(!kind.description().is_empty());
            assert_eq!(kind.suggested_charts().len(), 4);
        }
    }
}
