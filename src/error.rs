//! Error types for quote pricing.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for quote processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Malformed request (-3)
    InvalidRequest = -3,
    /// Read or write failure (-4)
    IoError = -4,
    /// Height/width missing or not positive (E100)
    InvalidDimensions = 100,
    /// Negative or non-finite quantity/price (E101)
    InvalidValue = 101,
    /// Unknown option name (E102)
    UnknownOption = 102,
    /// Item index out of range (E200)
    ItemNotFound = 200,
    /// Request produced no items (E201)
    NoItems = 201,
}

/// Main error type for the quote engine.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid quote request: {message}")]
    InvalidRequest { message: String },

    #[error("Invalid dimensions: height {height} mm x width {width} mm (both must be positive)")]
    InvalidDimensions { height: f64, width: f64 },

    #[error("Invalid value for '{field}': {value}")]
    InvalidValue { field: String, value: f64 },

    #[error("Unknown {kind}: '{value}'")]
    UnknownOption { kind: &'static str, value: String },

    #[error("Quote item {index} not found ({len} item(s) in quote)")]
    ItemNotFound { index: usize, len: usize },

    #[error("Quote has no items")]
    NoItems,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuoteError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::FileNotFound { .. } => ErrorCode::FileNotFound,
            QuoteError::EmptyFile { .. } => ErrorCode::EmptyFile,
            QuoteError::InvalidRequest { .. } => ErrorCode::InvalidRequest,
            QuoteError::InvalidDimensions { .. } => ErrorCode::InvalidDimensions,
            QuoteError::InvalidValue { .. } => ErrorCode::InvalidValue,
            QuoteError::UnknownOption { .. } => ErrorCode::UnknownOption,
            QuoteError::ItemNotFound { .. } => ErrorCode::ItemNotFound,
            QuoteError::NoItems => ErrorCode::NoItems,
            QuoteError::Io(_) => ErrorCode::IoError,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::InvalidRequest {
            message: err.to_string(),
        }
    }
}

/// Result type alias for quote operations.
pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = QuoteError::InvalidDimensions {
            height: 0.0,
            width: 1500.0,
        };
        assert_eq!(err.code(), ErrorCode::InvalidDimensions);
        assert_eq!(err.code_value(), 100);
        assert_eq!(QuoteError::NoItems.code_value(), 201);
        assert_eq!(
            QuoteError::EmptyFile {
                path: PathBuf::from("a.json")
            }
            .code_value(),
            -2
        );
    }

    #[test]
    fn test_io_error_code() {
        let err: QuoteError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.code(), ErrorCode::IoError);
        assert_eq!(err.code_value(), -4);
    }

    #[test]
    fn test_unknown_option_message() {
        let err = QuoteError::UnknownOption {
            kind: "glass color",
            value: "purple".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown glass color: 'purple'");
    }
}
