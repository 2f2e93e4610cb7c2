//! Error type shared by the tile pipeline.

use thiserror::Error;

/// Errors surfaced while turning a host payload into a rendered tile.
#[derive(Error, Debug)]
pub enum TileError {
    /// The query result carries no measure, so there is nothing to grade.
    #[error("Insufficient Data: this visualization requires at least one measure")]
    InsufficientData,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse JSON payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TileError {
    /// Short machine-readable kind, used as the `error_type` column of render records.
    pub fn kind(&self) -> &'static str {
        match self {
            TileError::InsufficientData => "insufficient_data",
            TileError::InvalidInput(_) => "invalid_input",
            TileError::Parse(_) => "parse",
            TileError::Io(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, TileError>;
