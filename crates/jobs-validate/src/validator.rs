//! Row validation against the person schema.
//!
//! Missing-ness is coerced before type checking: the explicit `Missing`
//! marker and float NaN both count as absent, so an optional field holding
//! either is never rejected as a type mismatch. An absent column behaves
//! exactly like an absent value.

use jobs_model::{CellValue, Row, Table, ValidatedPerson};

use crate::report::ValidationErrorReport;
use crate::schema::PERSON_SCHEMA;

/// Per-row validation outcome, as data: the caller decides whether to
/// collect, log or discard failed rows.
pub type RowResult = std::result::Result<ValidatedPerson, ValidationErrorReport>;

fn effective<'a>(row: &'a Row, name: &str) -> Option<&'a CellValue> {
    row.get(name).filter(|cell| !cell.is_missing())
}

fn kind_of(cell: &CellValue) -> &'static str {
    match cell {
        CellValue::Text(_) => "string",
        CellValue::Int(_) => "integer",
        CellValue::Float(_) => "float",
        CellValue::Missing => "missing",
    }
}

fn opt_text(row: &Row, name: &str) -> Option<String> {
    effective(row, name).and_then(|cell| cell.as_text().map(str::to_string))
}

fn opt_number(row: &Row, name: &str) -> Option<f64> {
    effective(row, name).and_then(CellValue::as_number)
}

fn opt_int(row: &Row, name: &str) -> Option<i64> {
    effective(row, name).and_then(CellValue::as_int)
}

/// Validates one row against [`PERSON_SCHEMA`], returning either the
/// typed record or a report naming every violated field.
pub fn validate_row(row: &Row) -> RowResult {
    let mut report = ValidationErrorReport::new(row.id);
    for spec in PERSON_SCHEMA {
        match effective(row, spec.name) {
            None if spec.required => report.push(spec.name, "required field is missing"),
            None => {}
            Some(cell) if !spec.kind.matches(cell) => report.push(
                spec.name,
                format!("expected {}, got {}", spec.kind.describe(), kind_of(cell)),
            ),
            Some(_) => {}
        }
    }
    if !report.is_empty() {
        return Err(report);
    }

    let (Some(job_title), Some(salary_min), Some(salary_max), Some(location_city)) = (
        opt_text(row, "job_title"),
        opt_number(row, "salary_min"),
        opt_number(row, "salary_max"),
        opt_text(row, "location_city"),
    ) else {
        // The schema loop above guarantees the required fields; reaching
        // here means the schema and the record shape drifted apart.
        report.push("schema", "schema and record definition disagree");
        return Err(report);
    };

    Ok(ValidatedPerson {
        job_title,
        rating: opt_number(row, "rating"),
        company_name: opt_text(row, "company_name"),
        size: opt_text(row, "size"),
        founded: opt_int(row, "founded"),
        type_of_ownership: opt_text(row, "type_of_ownership"),
        industry: opt_text(row, "industry"),
        sector: opt_text(row, "sector"),
        min_revenue: opt_number(row, "min_revenue"),
        max_revenue: opt_number(row, "max_revenue"),
        salary_min,
        salary_max,
        location_city,
        location_state: opt_text(row, "location_state"),
        headquarters_city: opt_text(row, "headquarters_city"),
        headquarters_state: opt_text(row, "headquarters_state"),
        num_competitors: opt_int(row, "num_competitors"),
    })
}

/// Validates every row, one outcome per row in source order.
pub fn validate_table(table: &Table) -> Vec<RowResult> {
    table.rows.iter().map(validate_row).collect()
}
