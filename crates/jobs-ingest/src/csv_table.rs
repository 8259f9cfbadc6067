//! CSV loading with column-level type inference.
//!
//! Cell typing is decided per column over the whole file: a column whose
//! non-empty cells all parse as integers becomes an `Int` column, else all
//! floats becomes `Float`, else `Text`. Empty cells become `Missing`. This
//! mirrors dataframe-style typing, so integer and float sentinels like
//! `-1` arrive as numbers and can be matched exactly by the cleaning
//! policy.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use jobs_model::{CellValue, Row, Table};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnType {
    Int,
    Float,
    Text,
}

fn infer_column_type(rows: &[Vec<String>], col_idx: usize) -> ColumnType {
    let mut seen_value = false;
    let mut all_int = true;
    let mut all_float = true;
    for row in rows {
        let Some(value) = row.get(col_idx) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        seen_value = true;
        if value.parse::<i64>().is_err() {
            all_int = false;
        }
        if value.parse::<f64>().is_err() {
            all_float = false;
        }
    }
    if !seen_value {
        return ColumnType::Text;
    }
    if all_int {
        ColumnType::Int
    } else if all_float {
        ColumnType::Float
    } else {
        ColumnType::Text
    }
}

fn typed_cell(value: &str, column_type: ColumnType) -> CellValue {
    if value.is_empty() {
        return CellValue::Missing;
    }
    match column_type {
        ColumnType::Int => value
            .parse::<i64>()
            .map_or_else(|_| CellValue::text(value), CellValue::Int),
        ColumnType::Float => value
            .parse::<f64>()
            .map_or_else(|_| CellValue::text(value), CellValue::Float),
        ColumnType::Text => CellValue::text(value),
    }
}

/// Loads a CSV file into a typed [`Table`]. The first record supplies the
/// column labels, as originally written (canonicalization happens later,
/// in the cleaning step).
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Err(IngestError::Empty(path.to_path_buf()));
    }

    let headers: Vec<String> = raw_rows[0].iter().map(|v| normalize_header(v)).collect();
    let data = &raw_rows[1..];

    let column_types: Vec<ColumnType> = (0..headers.len())
        .map(|idx| infer_column_type(data, idx))
        .collect();

    let mut table = Table::new(headers);
    for (id, record) in data.iter().enumerate() {
        let mut row = Row::new(id);
        for (idx, column) in table.columns.iter().enumerate() {
            let value = record.get(idx).map_or("", String::as_str);
            row.set(column.clone(), typed_cell(value, column_types[idx]));
        }
        table.push_row(row);
    }
    info!(
        path = %path.display(),
        rows = table.rows.len(),
        columns = table.columns.len(),
        "loaded csv"
    );
    Ok(table)
}
