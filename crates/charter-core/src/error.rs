//! Error types for the workshop library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all workshop operations.
#[derive(Error, Debug)]
pub enum WorkshopError {
    /// Advisory credential absent or rejected
    #[error("Advisory service is not configured: {message}")]
    Configuration { message: String },
    /// Network-level failure reaching the advisory service
    #[error("Could not reach the advisory service: {message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// Advisory service answered with a non-success status
    #[error("Advisory service error (HTTP {status}): {message}")]
    Service { status: u16, message: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A gateway request is already in flight
    #[error("An advisory request is already in flight")]
    AdvisoryBusy,
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Workbook construction or write failure
    #[error("Spreadsheet export error: {message}")]
    Export { message: String },
}

impl WorkshopError {
    /// Creates a configuration error with a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a transport error wrapping the underlying client failure.
    pub fn transport(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            message: message.into(),
            source,
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for WorkshopError {
    fn from(source: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export {
            message: source.to_string(),
        }
    }
}

/// User-facing classification of an advisory failure.
///
/// Only two classes are surfaced in the session pane: credential problems the
/// operator must fix, and service/network problems the user may retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The API credential is missing or invalid
    Configuration,
    /// The service could not be reached or answered with an error
    Service,
}

/// Message surfaced in the session pane for the most recent failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorInfo {
    /// Classify a workshop error into the user-facing message shown in the
    /// advisory pane.
    ///
    /// Configuration failures get wording that names the credential variable
    /// so the operator can self-diagnose; everything else collapses into the
    /// generic retryable service message.
    pub fn from_error(err: &WorkshopError) -> Self {
        match err {
            WorkshopError::Configuration { .. } => Self {
                kind: ErrorKind::Configuration,
                message: "The AI advisory service needs an API key. Set the GEMINI_API_KEY \
                          environment variable and restart."
                    .to_string(),
            },
            _ => Self {
                kind: ErrorKind::Service,
                message: "Could not reach the advisory service. Check your connection and try \
                          again."
                    .to_string(),
            },
        }
    }
}

/// Result type alias for workshop operations
pub type Result<T> = std::result::Result<T, WorkshopError>;
