//! "City, State" splitting for location and headquarters columns.

use jobs_model::{CellValue, Table};

use crate::error::Result;
use crate::require_column;

/// Splits a "City, State" string on the first comma. The city keeps its
/// text as-is; the state is trimmed of surrounding whitespace. A string
/// with no comma is all city; non-text cells yield missing for both.
pub fn split_city_state(cell: &CellValue) -> (CellValue, CellValue) {
    let Some(text) = cell.as_text() else {
        return (CellValue::Missing, CellValue::Missing);
    };
    match text.split_once(',') {
        Some((city, state)) => (CellValue::text(city), CellValue::text(state.trim())),
        None => (CellValue::text(text), CellValue::Missing),
    }
}

/// Splits `source` into two new columns and drops the source column.
pub fn extract_city_state_columns(
    table: &Table,
    source: &str,
    city_column: &str,
    state_column: &str,
) -> Result<Table> {
    require_column(table, source)?;
    let mut out = table.clone();
    for row in &mut out.rows {
        let (city, state) = split_city_state(row.get(source).unwrap_or(&CellValue::Missing));
        row.set(city_column, city);
        row.set(state_column, state);
    }
    out.add_column(city_column);
    out.add_column(state_column);
    out.remove_column(source);
    Ok(out)
}

/// Splits `source` into `location_city` and `location_state`.
pub fn extract_location_columns(table: &Table, source: &str) -> Result<Table> {
    extract_city_state_columns(table, source, "location_city", "location_state")
}

/// Splits `source` into `headquarters_city` and `headquarters_state`.
pub fn extract_headquarters_columns(table: &Table, source: &str) -> Result<Table> {
    extract_city_state_columns(table, source, "headquarters_city", "headquarters_state")
}
