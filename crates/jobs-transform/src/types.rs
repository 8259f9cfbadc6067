use jobs_model::CellValue;

/// A (lower, upper) pair of extracted numeric bounds, shared by revenue
/// and salary extraction.
///
/// `low <= high` is expected of well-formed source text but not enforced
/// here; an inverted pair is a data-quality issue, not a parse failure.
/// `high` may be absent when only a floor is stated ("$10+ billion");
/// `low` is zero when only a ceiling is stated ("Less than $1 million").
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl Bounds {
    pub const MISSING: Self = Self {
        low: None,
        high: None,
    };

    pub fn is_missing(self) -> bool {
        self.low.is_none() && self.high.is_none()
    }
}

pub(crate) fn float_cell(value: Option<f64>) -> CellValue {
    value.map_or(CellValue::Missing, CellValue::Float)
}

pub(crate) fn int_cell(value: Option<f64>) -> CellValue {
    value.map_or(CellValue::Missing, |v| CellValue::Int(v as i64))
}
