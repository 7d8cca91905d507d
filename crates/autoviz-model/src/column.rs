//! Per-column and per-dataset descriptors produced by the statistics
//! supplier and consumed by the classification core.

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// Inferred type of a source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Number,
    Text,
    Date,
    Boolean,
    Mixed,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Number => "number",
            ColumnType::Text => "text",
            ColumnType::Date => "date",
            ColumnType::Boolean => "boolean",
            ColumnType::Mixed => "mixed",
        }
    }
}

/// Summary statistics for a numeric column.
///
/// Present iff the column type is [`ColumnType::Number`] and at least one
/// non-null numeric value exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

/// Descriptor for one source column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name, unique within a dataset.
    pub name: String,
    pub column_type: ColumnType,
    /// Distinct non-null value count. Invariant: `unique_count <= row_count`.
    pub unique_count: usize,
    pub null_count: usize,
    /// Ordered prefix of non-null values (at most 5), used only for
    /// heuristic peeking. Not a representative sample.
    pub sample_values: Vec<CellValue>,
    pub numeric: Option<NumericSummary>,
}

impl ColumnProfile {
    pub fn is_numeric(&self) -> bool {
        self.column_type == ColumnType::Number
    }

    pub fn is_text(&self) -> bool {
        self.column_type == ColumnType::Text
    }

    pub fn is_date(&self) -> bool {
        self.column_type == ColumnType::Date
    }

    /// Numeric span (max - min), treating absent stats as zero.
    pub fn range(&self) -> f64 {
        self.numeric.map(|s| s.max - s.min).unwrap_or(0.0)
    }

    /// Sampled values that coerce to numbers.
    pub fn sample_numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.sample_values.iter().filter_map(CellValue::as_f64)
    }

    /// Sampled values that are text.
    pub fn sample_strings(&self) -> impl Iterator<Item = &str> {
        self.sample_values.iter().filter_map(|v| match v {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

/// Source file metadata. Carried for presentation; the classification core
/// never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub file_name: String,
    pub file_size: u64,
}

/// Descriptor for a whole dataset snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetProfile {
    pub row_count: usize,
    pub column_count: usize,
    /// Columns in source order.
    pub columns: Vec<ColumnProfile>,
    pub source: Option<SourceInfo>,
}

impl DatasetProfile {
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Columns typed as dates, in source order.
    pub fn date_columns(&self) -> impl Iterator<Item = &ColumnProfile> {
        self.columns.iter().filter(|c| c.is_date())
    }
}
