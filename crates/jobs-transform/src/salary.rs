//! Salary-range extraction.
//!
//! Salary estimates carry a "$40K-$80K" range somewhere in the text
//! (possibly followed by "(Glassdoor est.)" or similar). The range is
//! searched for rather than matched exactly, so no upstream pre-filtering
//! is required; a cell with no recognizable range yields missing bounds
//! for that row and is left for the validator to report.

use std::sync::LazyLock;

use jobs_model::{CellValue, Table};
use regex::Regex;
use tracing::warn;

use crate::error::Result;
use crate::require_column;
use crate::types::{Bounds, int_cell};

static SALARY_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d+)[Kk]-\$(\d+)[Kk]").expect("valid regex"));

/// Extracts the (low, high) salary bounds in USD from a raw cell.
/// Total over all inputs.
pub fn extract_salary_bounds(cell: &CellValue) -> Bounds {
    let Some(text) = cell.as_text() else {
        return Bounds::MISSING;
    };
    let Some(caps) = SALARY_RANGE.captures(text) else {
        return Bounds::MISSING;
    };
    // Captures are \d+, which always parse.
    let low: f64 = caps[1].parse().unwrap_or(0.0);
    let high: f64 = caps[2].parse().unwrap_or(0.0);
    Bounds {
        low: Some(low * 1000.0),
        high: Some(high * 1000.0),
    }
}

/// Applies [`extract_salary_bounds`] to `source`, writing integer
/// `salary_min` and `salary_max` columns and dropping the source column.
pub fn extract_salary_columns(table: &Table, source: &str) -> Result<Table> {
    require_column(table, source)?;
    let mut out = table.clone();
    for row in &mut out.rows {
        let bounds = row.get(source).map_or(Bounds::MISSING, extract_salary_bounds);
        let present = row.get(source).is_some_and(|cell| !cell.is_missing());
        if bounds.is_missing() && present {
            warn!(row = row.id, "unrecognized salary text");
        }
        row.set("salary_min", int_cell(bounds.low));
        row.set("salary_max", int_cell(bounds.high));
    }
    out.add_column("salary_min");
    out.add_column("salary_max");
    out.remove_column(source);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_found_inside_longer_text() {
        let bounds = extract_salary_bounds(&CellValue::text("$79K-$131K (Glassdoor est.)"));
        assert_eq!(bounds.low, Some(79_000.0));
        assert_eq!(bounds.high, Some(131_000.0));
    }

    #[test]
    fn k_suffix_is_case_insensitive() {
        let bounds = extract_salary_bounds(&CellValue::text("$40k-$80K"));
        assert_eq!(bounds.low, Some(40_000.0));
        assert_eq!(bounds.high, Some(80_000.0));
    }

    #[test]
    fn malformed_text_yields_missing_bounds() {
        assert_eq!(
            extract_salary_bounds(&CellValue::text("Employer Provided Salary")),
            Bounds::MISSING
        );
        assert_eq!(extract_salary_bounds(&CellValue::Missing), Bounds::MISSING);
    }
}
