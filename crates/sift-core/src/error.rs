//! Error types for Sift

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Description cannot be empty")]
    EmptyInput,

    #[error("Too many items: {count} exceeds the limit of {limit}")]
    TooManyItems { count: usize, limit: usize },

    #[error("Training error: {0}")]
    Training(String),

    #[error("No model to save; train a model first")]
    NoModel,

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
