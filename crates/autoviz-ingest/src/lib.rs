//! CSV ingestion for AutoViz.
//!
//! Decodes a CSV file into ordered headers plus typed rows of
//! [`CellValue`]s. This is a collaborator of the classification core, not
//! part of it: the core only ever sees the decoded rows and the profiles
//! computed from them.

#![deny(unsafe_code)]

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use thiserror::Error;

use autoviz_model::{CellValue, Row, SourceInfo};

/// Errors from CSV ingestion.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("no header row found")]
    MissingHeader,
}

/// A decoded table: ordered headers and typed rows.
#[derive(Debug, Clone)]
pub struct TableData {
    /// Column names in source order.
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    pub source: Option<SourceInfo>,
}

/// Read a CSV file from disk.
pub fn read_csv_path(path: &Path) -> Result<TableData, IngestError> {
    let file_size = std::fs::metadata(path)?.len();
    let file = File::open(path)?;
    let mut table = read_csv(file)?;
    table.source = Some(SourceInfo {
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        file_size,
    });
    Ok(table)
}

/// Read CSV data from any reader. Empty lines are skipped; short records
/// are padded with nulls.
pub fn read_csv<R: Read>(reader: R) -> Result<TableData, IngestError> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(normalize_header).collect();
    if headers.is_empty() {
        return Err(IngestError::MissingHeader);
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut row = Row::new();
        for (idx, header) in headers.iter().enumerate() {
            let raw = record.get(idx).unwrap_or("");
            row.insert(header.clone(), coerce_cell(raw));
        }
        rows.push(row);
    }

    Ok(TableData {
        headers,
        rows,
        source: None,
    })
}

/// Trim whitespace and a BOM, collapsing interior runs of whitespace.
fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Dynamic typing for a raw cell: empty becomes null, booleans and numbers
/// are recognized, everything else stays text.
fn coerce_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        return CellValue::Null;
    }
    match trimmed {
        "true" => return CellValue::Boolean(true),
        "false" => return CellValue::Boolean(false),
        _ => {}
    }
    if let Ok(n) = trimmed.parse::<f64>()
        && n.is_finite()
    {
        return CellValue::Number(n);
    }
    CellValue::Text(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_typed_rows_in_order() {
        let input = "region,revenue,active\nNorth,1200.5,true\nSouth,900,false\n";
        let table = read_csv(input.as_bytes()).expect("read csv");

        assert_eq!(table.headers, vec!["region", "revenue", "active"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.rows[0].get("region"),
            Some(&CellValue::Text("North".to_string()))
        );
        assert_eq!(
            table.rows[0].get("revenue"),
            Some(&CellValue::Number(1200.5))
        );
        assert_eq!(table.rows[1].get("active"), Some(&CellValue::Boolean(false)));
    }

    #[test]
    fn empty_cells_become_null() {
        let input = "a,b\n1,\n,2\n";
        let table = read_csv(input.as_bytes()).expect("read csv");
        assert_eq!(table.rows[0].get("b"), Some(&CellValue::Null));
        assert_eq!(table.rows[1].get("a"), Some(&CellValue::Null));
    }

    #[test]
    fn skips_blank_lines_and_pads_short_records() {
        let input = "a,b\n1,2\n\n3\n";
        let table = read_csv(input.as_bytes()).expect("read csv");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].get("b"), Some(&CellValue::Null));
    }

    #[test]
    fn normalizes_headers() {
        let input = "\u{feff} First  Column ,second\nx,y\n";
        let table = read_csv(input.as_bytes()).expect("read csv");
        assert_eq!(table.headers, vec!["First Column", "second"]);
    }
}
