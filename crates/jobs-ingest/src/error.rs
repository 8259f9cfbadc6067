use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read csv {path}: {source}")]
    Read { path: PathBuf, source: csv::Error },
    #[error("csv file has no header row: {0}")]
    Empty(PathBuf),
}

pub type Result<T> = std::result::Result<T, IngestError>;
