#![deny(unsafe_code)]

use std::collections::BTreeMap;

/// A single cell in a table.
///
/// `Missing` is a first-class absence marker, distinct from the empty
/// string, from `Int(-1)` and from any other in-band sentinel the source
/// data may use. Equality is exact variant-and-value: `Int(-1)` never
/// compares equal to `Text("-1")` or `Float(-1.0)`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// True for the explicit marker and for float NaN, which the source
    /// data uses interchangeably with absence.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view over both integer and float cells. NaN counts as
    /// missing, not as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) if !v.is_nan() => Some(*v),
            _ => None,
        }
    }
}

/// One table row. `id` is the zero-based position in the source table and
/// stays stable through every transformation, so validation reports and
/// outputs can be mapped back to the original row.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub id: usize,
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            cells: BTreeMap::new(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    pub fn set(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }
}

/// An ordered sequence of rows sharing one column set. `columns` carries
/// the display order; cells are keyed by column name.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Appends a column label unless it is already present.
    pub fn add_column(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.has_column(&name) {
            self.columns.push(name);
        }
    }

    /// Removes a column label and the matching cell from every row.
    pub fn remove_column(&mut self, name: &str) {
        self.columns.retain(|c| c != name);
        for row in &mut self.rows {
            row.cells.remove(name);
        }
    }
}
