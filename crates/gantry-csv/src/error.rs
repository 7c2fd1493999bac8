//! Error types for gantry-csv operations.

use std::io;
use thiserror::Error;

/// The error type for gantry-csv operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading or writing.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing or serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid CSV input that prevents reading any records.
    #[error("Invalid CSV input: {0}")]
    InvalidFormat(String),
}

/// A specialized Result type for gantry-csv operations.
pub type Result<T> = std::result::Result<T, Error>;
