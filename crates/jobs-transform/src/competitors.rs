//! Competitor-list counting.

use jobs_model::{CellValue, Table};

use crate::error::Result;
use crate::require_column;

/// Counts the segments of a comma-separated competitor list. The split is
/// unconditional, so an empty string still counts as one segment; missing
/// input propagates to a missing count.
pub fn count_competitors(cell: &CellValue) -> CellValue {
    match cell.as_text() {
        Some(text) => CellValue::Int(text.split(',').count() as i64),
        None => CellValue::Missing,
    }
}

/// Writes a `num_competitors` column from `source` and drops the source
/// column.
pub fn extract_num_competitors(table: &Table, source: &str) -> Result<Table> {
    require_column(table, source)?;
    let mut out = table.clone();
    for row in &mut out.rows {
        let count = count_competitors(row.get(source).unwrap_or(&CellValue::Missing));
        row.set("num_competitors", count);
    }
    out.add_column("num_competitors");
    out.remove_column(source);
    Ok(out)
}
