//! Revenue-range extraction.
//!
//! Source strings look like "$5 to $10 million (USD)", "$500 million to
//! $1 billion (USD)", "$10+ billion (USD)" or "Less than $1 million
//! (USD)". Amounts are non-negative integers; the unit word and "less
//! than" match case-insensitively.

use std::sync::LazyLock;

use jobs_model::{CellValue, Table};
use regex::{Captures, Regex};
use tracing::warn;

use crate::error::Result;
use crate::require_column;
use crate::types::{Bounds, float_cell};

// Tried in order; first match wins.
static BOTH_UNITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\$(\d+)\s*(million|billion)\s*to\s*\$(\d+)\s*(million|billion)")
        .expect("valid regex")
});
static SHARED_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\$(\d+)\s*to\s*\$(\d+)\s*(million|billion)").expect("valid regex")
});
static FLOOR_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\$(\d+)\+\s*(million|billion)").expect("valid regex"));
static CEILING_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)less than\s*\$(\d+)\s*(million|billion)").expect("valid regex"));

fn unit_factor(unit: &str) -> f64 {
    if unit.eq_ignore_ascii_case("million") {
        1e6
    } else {
        1e9
    }
}

fn amount(caps: &Captures, idx: usize) -> f64 {
    // The capture is \d+, which always parses.
    caps[idx].parse().unwrap_or(0.0)
}

/// Extracts the (low, high) revenue bounds in USD from a raw cell.
///
/// Total over all inputs: missing cells, non-text cells and unrecognized
/// text all yield [`Bounds::MISSING`]; this never fails.
pub fn extract_revenue_range(cell: &CellValue) -> Bounds {
    let Some(text) = cell.as_text() else {
        return Bounds::MISSING;
    };

    // "$500 million to $1 billion": each bound carries its own unit.
    if let Some(caps) = BOTH_UNITS.captures(text) {
        return Bounds {
            low: Some(amount(&caps, 1) * unit_factor(&caps[2])),
            high: Some(amount(&caps, 3) * unit_factor(&caps[4])),
        };
    }

    // "$5 to $10 million": one trailing unit applies to both bounds.
    if let Some(caps) = SHARED_UNIT.captures(text) {
        let factor = unit_factor(&caps[3]);
        return Bounds {
            low: Some(amount(&caps, 1) * factor),
            high: Some(amount(&caps, 2) * factor),
        };
    }

    // "$10+ billion": only a floor is stated.
    if let Some(caps) = FLOOR_ONLY.captures(text) {
        return Bounds {
            low: Some(amount(&caps, 1) * unit_factor(&caps[2])),
            high: None,
        };
    }

    // "Less than $1 million": only a ceiling is stated.
    if let Some(caps) = CEILING_ONLY.captures(text) {
        return Bounds {
            low: Some(0.0),
            high: Some(amount(&caps, 1) * unit_factor(&caps[2])),
        };
    }

    Bounds::MISSING
}

/// Applies [`extract_revenue_range`] to `source`, writing `min_revenue`
/// and `max_revenue` columns and dropping the source column.
pub fn extract_revenue_columns(table: &Table, source: &str) -> Result<Table> {
    require_column(table, source)?;
    let mut out = table.clone();
    for row in &mut out.rows {
        let bounds = row.get(source).map_or(Bounds::MISSING, extract_revenue_range);
        let was_text = matches!(row.get(source), Some(CellValue::Text(_)));
        if bounds.is_missing() && was_text {
            warn!(row = row.id, "unrecognized revenue text");
        }
        row.set("min_revenue", float_cell(bounds.low));
        row.set("max_revenue", float_cell(bounds.high));
    }
    out.add_column("min_revenue");
    out.add_column("max_revenue");
    out.remove_column(source);
    Ok(out)
}
