use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("sentinel policy lists no columns")]
    EmptyColumnList,
    #[error("sentinel policy lists no sentinel values")]
    EmptySentinelList,
    #[error("column not found: {0}")]
    ColumnNotFound(String),
    #[error("read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CleanError>;
