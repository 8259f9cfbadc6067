//! Text-to-structured-field extraction.
//!
//! Each extractor is a pure, total function over one raw cell: any
//! unrecognized shape yields missing output rather than an error, so one
//! malformed row never halts the table. Table-level operations only fail
//! when the named source column does not exist.

pub mod competitors;
pub mod error;
pub mod location;
pub mod revenue;
pub mod salary;
pub mod types;

pub use competitors::{count_competitors, extract_num_competitors};
pub use error::{Result, TransformError};
pub use location::{
    extract_city_state_columns, extract_headquarters_columns, extract_location_columns,
    split_city_state,
};
pub use revenue::{extract_revenue_columns, extract_revenue_range};
pub use salary::{extract_salary_bounds, extract_salary_columns};
pub use types::Bounds;

use jobs_model::Table;

pub(crate) fn require_column(table: &Table, name: &str) -> Result<()> {
    if table.has_column(name) {
        Ok(())
    } else {
        Err(TransformError::ColumnNotFound(name.to_string()))
    }
}
