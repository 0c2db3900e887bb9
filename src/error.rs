// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Parameter source is missing a field or holds something unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// Bounds that cannot drive a run (inverted range, zero arrival rate, ...).
    #[error("{field} out of range: {reason}")]
    Range {
        field: &'static str,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type SimResult<T> = Result<T, SimError>;
