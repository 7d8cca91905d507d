//! Scalar cell values and the coercion rules shared by every statistic.
//!
//! Rows are untyped in the source data (CSV cells, JSON scalars). Instead of
//! duck-typing at each use site, every consumer goes through [`CellValue`]'s
//! two conversions: [`CellValue::as_f64`] for numeric aggregates and
//! [`CellValue::label`] for categorical grouping keys. This keeps the
//! "is this a number" decision in exactly one place.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single untyped cell from a source dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing or empty value.
    Null,
    /// Boolean flag.
    Boolean(bool),
    /// Numeric value (integers and floats are not distinguished).
    Number(f64),
    /// Free text.
    Text(String),
}

/// A source record: column name to cell value.
///
/// Absent keys coerce the same way as [`CellValue::Null`].
pub type Row = BTreeMap<String, CellValue>;

impl CellValue {
    /// Best-effort numeric coercion.
    ///
    /// Numbers pass through unless NaN, text is parsed after trimming,
    /// booleans map to 1/0, nulls are excluded entirely.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Null => None,
            CellValue::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::Number(n) => {
                if n.is_nan() {
                    None
                } else {
                    Some(*n)
                }
            }
            CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| !n.is_nan()),
        }
    }

    /// Stringified form used as a grouping key. Nulls become the empty
    /// string so that missing values still count as one category.
    pub fn label(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Boolean(b) => b.to_string(),
            CellValue::Number(n) => format!("{n}"),
            CellValue::Text(s) => s.clone(),
        }
    }

    /// True for [`CellValue::Null`] and for empty text.
    pub fn is_null(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

/// Coerce a row cell by column name; absent columns behave as null.
pub fn cell_f64(row: &Row, column: &str) -> Option<f64> {
    row.get(column).and_then(CellValue::as_f64)
}

/// Grouping label for a row cell; absent columns become the empty string.
pub fn cell_label(row: &Row, column: &str) -> String {
    row.get(column).map(CellValue::label).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_coercion() {
        assert_eq!(CellValue::Number(2.5).as_f64(), Some(2.5));
        assert_eq!(CellValue::Text(" 42 ".into()).as_f64(), Some(42.0));
        assert_eq!(CellValue::Text("abc".into()).as_f64(), None);
        assert_eq!(CellValue::Boolean(true).as_f64(), Some(1.0));
        assert_eq!(CellValue::Null.as_f64(), None);
        assert_eq!(CellValue::Number(f64::NAN).as_f64(), None);
    }

    #[test]
    fn labels_match_grouping_semantics() {
        assert_eq!(CellValue::Null.label(), "");
        assert_eq!(CellValue::Number(2.0).label(), "2");
        assert_eq!(CellValue::Number(2.5).label(), "2.5");
        assert_eq!(CellValue::Boolean(false).label(), "false");
    }

    #[test]
    fn absent_columns_coerce_as_null() {
        let row = Row::new();
        assert_eq!(cell_f64(&row, "missing"), None);
        assert_eq!(cell_label(&row, "missing"), "");
    }
}
