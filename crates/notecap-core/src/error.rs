//! Error types and exit codes for notecap
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unreadable notes file, unknown note id, etc.)
//!
//! The search engine itself never fails; these errors only arise at the
//! note source, configuration and CLI edges.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the notecap binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unreadable notes file, missing note (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during notecap operations
#[derive(Error, Debug)]
pub enum NotecapError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("data directory not found: {path:?}")]
    DataDirNotFound { path: PathBuf },

    #[error("invalid notes file {path:?}: {reason}")]
    InvalidNotesFile { path: PathBuf, reason: String },

    #[error("note not found: {id}")]
    NoteNotFound { id: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl NotecapError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        NotecapError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NotecapError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NotecapError::UnknownFormat(_)
            | NotecapError::UsageError(_)
            | NotecapError::InvalidValue { .. } => ExitCode::Usage,

            NotecapError::DataDirNotFound { .. }
            | NotecapError::InvalidNotesFile { .. }
            | NotecapError::NoteNotFound { .. } => ExitCode::Data,

            NotecapError::Io(_)
            | NotecapError::Json(_)
            | NotecapError::Toml(_)
            | NotecapError::FailedOperationWithTarget { .. }
            | NotecapError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            NotecapError::UnknownFormat(_) => "unknown_format",
            NotecapError::UsageError(_) => "usage_error",
            NotecapError::InvalidValue { .. } => "invalid_value",
            NotecapError::DataDirNotFound { .. } => "data_dir_not_found",
            NotecapError::InvalidNotesFile { .. } => "invalid_notes_file",
            NotecapError::NoteNotFound { .. } => "note_not_found",
            NotecapError::Io(_) => "io_error",
            NotecapError::Json(_) => "json_error",
            NotecapError::Toml(_) => "toml_error",
            NotecapError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            NotecapError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for notecap operations
pub type Result<T> = std::result::Result<T, NotecapError>;
