//! Shared data model for the AutoViz chart recommendation engine.
//!
//! Defines the scalar cell value with its uniform coercion rules, the
//! column and dataset profiles produced by the statistics supplier, and
//! the recommendation/classification types emitted by the core.

#![deny(unsafe_code)]

pub mod column;
pub mod recommendation;
pub mod result;
pub mod value;

pub use column::{ColumnProfile, ColumnType, DatasetProfile, NumericSummary, SourceInfo};
pub use recommendation::{Aggregation, ChartKind, ChartRecommendation};
pub use result::{Classification, ColumnRoles, DatasetKind};
pub use value::{CellValue, Row, cell_f64, cell_label};
