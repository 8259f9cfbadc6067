//! Value normalization for the job-postings pipeline: canonical column
//! labels and sentinel-to-missing translation.

pub mod config;
pub mod error;
pub mod normalize;
pub mod sentinel;

pub use config::CleaningConfig;
pub use error::{CleanError, Result};
pub use normalize::{canonical_name, drop_columns, keep_before, normalize_column_names};
pub use sentinel::{MissingColumns, SentinelPolicy, replace_vals_in_cols};
