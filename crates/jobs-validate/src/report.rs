//! Structured validation failure reports.

use thiserror::Error;

/// One violated field: which field, and why.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
}

/// Everything wrong with one row. Violations are accumulated across all
/// fields, not cut short at the first failure, so callers can enumerate
/// them individually.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize)]
#[error("row {row_id} failed validation with {} violation(s)", .violations.len())]
pub struct ValidationErrorReport {
    pub row_id: usize,
    pub violations: Vec<FieldViolation>,
}

impl ValidationErrorReport {
    pub fn new(row_id: usize) -> Self {
        Self {
            row_id,
            violations: Vec::new(),
        }
    }

    pub fn push(&mut self, field: &str, reason: impl Into<String>) {
        self.violations.push(FieldViolation {
            field: field.to_string(),
            reason: reason.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Names of the violated fields, in accumulation order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.field.as_str())
    }
}
