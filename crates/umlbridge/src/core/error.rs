//! Core error types for translation
//!
//! Parsers of diagram text never fail; these errors cover the cases that do
//! abort an operation.

use thiserror::Error;

/// Core error types for translation
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Parse error: {message} at line {line}, column {column}")]
    Parse {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Operation not implemented: {operation}")]
    NotImplemented { operation: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TranslateError {
    /// Create a new parse error
    pub fn parse_error(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create a new not-implemented error
    pub fn not_implemented(operation: impl Into<String>) -> Self {
        Self::NotImplemented {
            operation: operation.into(),
        }
    }
}
