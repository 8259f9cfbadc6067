use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("column not found: {0}")]
    ColumnNotFound(String),
}

pub type Result<T> = std::result::Result<T, TransformError>;
