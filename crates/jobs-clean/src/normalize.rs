//! Column-label normalization and simple column-level cleanups.

use jobs_model::{CellValue, Row, Table};
use tracing::warn;

/// Canonical form of a column label: lowercase, spaces replaced with
/// underscores.
pub fn canonical_name(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "_")
}

/// Rewrites every column label to its canonical form. Row data is
/// unchanged; the operation is idempotent.
///
/// When two source labels collapse to the same canonical name, the later
/// source column's data wins and the canonical column keeps the earlier
/// column's position.
pub fn normalize_column_names(table: &Table) -> Table {
    let mut columns: Vec<String> = Vec::with_capacity(table.columns.len());
    for name in &table.columns {
        let canonical = canonical_name(name);
        if columns.contains(&canonical) {
            warn!(column = %name, canonical = %canonical, "column label collides after normalization; later column wins");
        } else {
            columns.push(canonical);
        }
    }

    let mut out = Table::new(columns);
    for row in &table.rows {
        let mut cells = Row::new(row.id);
        // Source order, so a later colliding column overwrites an earlier one.
        for name in &table.columns {
            if let Some(value) = row.get(name) {
                cells.set(canonical_name(name), value.clone());
            }
        }
        out.push_row(cells);
    }
    out
}

/// Drops the listed columns when present; absent names are ignored.
pub fn drop_columns(table: &Table, names: &[String]) -> Table {
    let mut out = table.clone();
    for name in names {
        out.remove_column(name);
    }
    out
}

/// Truncates each text cell in `column` at the first occurrence of
/// `separator`. Non-text and missing cells pass through unchanged.
pub fn keep_before(table: &Table, column: &str, separator: char) -> Table {
    let mut out = table.clone();
    for row in &mut out.rows {
        let truncated = match row.get(column) {
            Some(CellValue::Text(s)) => s.split_once(separator).map(|(head, _)| head.to_string()),
            _ => None,
        };
        if let Some(head) = truncated {
            row.set(column, CellValue::Text(head));
        }
    }
    out
}
