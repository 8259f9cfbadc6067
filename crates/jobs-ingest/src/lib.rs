//! CSV ingestion: loads a postings file into a typed [`jobs_model::Table`].

pub mod csv_table;
pub mod error;

pub use csv_table::read_csv_table;
pub use error::{IngestError, Result};
