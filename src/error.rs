use std::path::PathBuf;

use thiserror::Error;

/// Error types for numeral translation
#[derive(Debug, Error)]
pub enum NumeralError {
    /// Input string does not match the numeral grammar
    #[error("Invalid numeral format: '{input}'")]
    InvalidFormat { input: String },

    /// Magnitude exceeds the configured bound, or a negative raw integer
    #[error("Number {value} is out of range (at most {max_digits} digits)")]
    OutOfRange { value: String, max_digits: usize },

    /// A word table lookup received an index outside the table
    #[error("Internal error: {0} is not a digit")]
    InvalidDigit(u32),

    /// Scale table cannot be used for translation
    #[error("Invalid scale configuration: {0}")]
    InvalidConfig(String),

    /// Scale table JSON could not be parsed
    #[error("Failed to parse scale table JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Failed to read file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON from '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl NumeralError {
    pub(crate) fn out_of_range(value: impl ToString, max_digits: usize) -> Self {
        NumeralError::OutOfRange {
            value: value.to_string(),
            max_digits,
        }
    }
}

/// Result type for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;
