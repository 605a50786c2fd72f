//! Structured error types for the canto repository.
//!
//! Errors carry a stable code so callers can tell a malformed canto
//! identifier apart from one that simply does not exist.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use canti_types::CANTI_QUANTITY;

/// Error codes for canti operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Canto identifier is not an integer.
    InvalidArgument,
    /// Canto identifier is an integer outside the corpus range.
    CantoNotFound,
    /// Canto file does not exist.
    CantoFileMissing,
    /// Any other I/O or decoding failure while reading a canto.
    IoError,
    /// Word counts could not be written.
    PersistenceFailure,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::InvalidArgument => write!(f, "invalid_argument"),
            ErrorCode::CantoNotFound => write!(f, "canto_not_found"),
            ErrorCode::CantoFileMissing => write!(f, "canto_file_missing"),
            ErrorCode::IoError => write!(f, "io_error"),
            ErrorCode::PersistenceFailure => write!(f, "persistence_failure"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CantiError {
    /// Error code for programmatic handling.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

pub type Result<T> = std::result::Result<T, CantiError>;

impl CantiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: ErrorCode,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn invalid_argument(value: impl fmt::Display) -> Self {
        Self::with_details(
            ErrorCode::InvalidArgument,
            "canto_number must be an integer",
            format!("got `{value}`"),
        )
    }

    pub fn canto_not_found(value: impl fmt::Display) -> Self {
        Self::with_details(
            ErrorCode::CantoNotFound,
            format!("canto_number must be between 1 and {CANTI_QUANTITY}"),
            format!("got `{value}`"),
        )
    }

    pub fn file_missing(path: &Path) -> Self {
        Self::new(
            ErrorCode::CantoFileMissing,
            format!("File '{}' not found", path.display()),
        )
    }

    pub fn io_error(path: &Path, err: impl fmt::Display) -> Self {
        Self::with_details(
            ErrorCode::IoError,
            format!("error while opening '{}'", path.display()),
            err.to_string(),
        )
    }

    pub fn persistence(path: &Path, err: impl fmt::Display) -> Self {
        Self::with_details(
            ErrorCode::PersistenceFailure,
            format!("error while serializing to '{}'", path.display()),
            err.to_string(),
        )
    }

    /// True when the canto index was well-formed but outside the corpus.
    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::CantoNotFound
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"code":"{}","message":"{}"}}"#,
                self.code, self.message
            )
        })
    }
}

impl fmt::Display for CantiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "[{}] {}: {}", self.code, self.message, details)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}

impl std::error::Error for CantiError {}
