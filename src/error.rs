use thiserror::Error;

use crate::catalog::RowError;

#[derive(Debug, Error)]
pub enum PricerError {
    #[error("Failed to fetch catalog source: {0}")]
    SourceFetch(String),

    #[error("Row {row}: {source}")]
    Row { row: usize, source: RowError },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No selectable ingredients in catalog")]
    NoSelectableIngredients,
}

pub type Result<T> = std::result::Result<T, PricerError>;
