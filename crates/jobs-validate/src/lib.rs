//! Per-row schema validation: a cleaned row either becomes a typed
//! [`jobs_model::ValidatedPerson`] or a [`ValidationErrorReport`] naming
//! every violated field.

pub mod report;
pub mod schema;
pub mod validator;

pub use report::{FieldViolation, ValidationErrorReport};
pub use schema::{FieldKind, FieldSpec, PERSON_SCHEMA};
pub use validator::{RowResult, validate_row, validate_table};
