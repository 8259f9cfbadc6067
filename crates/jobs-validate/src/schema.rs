//! The declarative person schema: one entry per field, with a required
//! flag and a type constraint, evaluated imperatively by the validator.

use jobs_model::CellValue;

/// Type constraint for one schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// A text cell.
    Text,
    /// An integer cell.
    Int,
    /// An integer or float cell.
    Number,
}

impl FieldKind {
    pub fn matches(self, cell: &CellValue) -> bool {
        match self {
            Self::Text => matches!(cell, CellValue::Text(_)),
            Self::Int => matches!(cell, CellValue::Int(_)),
            Self::Number => matches!(cell, CellValue::Int(_) | CellValue::Float(_)),
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Int => "integer",
            Self::Number => "number",
        }
    }
}

/// One schema entry.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

const fn required(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        required: true,
        kind,
    }
}

const fn optional(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        required: false,
        kind,
    }
}

/// The full person schema, in output-record order.
pub const PERSON_SCHEMA: &[FieldSpec] = &[
    required("job_title", FieldKind::Text),
    optional("rating", FieldKind::Number),
    optional("company_name", FieldKind::Text),
    optional("size", FieldKind::Text),
    optional("founded", FieldKind::Int),
    optional("type_of_ownership", FieldKind::Text),
    optional("industry", FieldKind::Text),
    optional("sector", FieldKind::Text),
    optional("min_revenue", FieldKind::Number),
    optional("max_revenue", FieldKind::Number),
    required("salary_min", FieldKind::Number),
    required("salary_max", FieldKind::Number),
    required("location_city", FieldKind::Text),
    optional("location_state", FieldKind::Text),
    optional("headquarters_city", FieldKind::Text),
    optional("headquarters_state", FieldKind::Text),
    optional("num_competitors", FieldKind::Int),
];
