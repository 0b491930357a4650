//! Error types for the frequency extraction engine

use std::fmt;

/// Errors that can occur during frequency extraction
#[derive(Debug, Clone)]
pub enum ExtractionError {
    /// Invalid configuration (settings file, window size, algorithm name)
    InvalidConfig(String),

    /// Audio decoding error
    DecodingError(String),

    /// Invalid input parameters
    InvalidInput(String),

    /// Output file write error
    IoError(String),
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            ExtractionError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
            ExtractionError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ExtractionError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ExtractionError {}
