use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the server binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Input stream closed normally
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Startup or I/O failure (config, stdout write, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Error codes reported in failure envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidInput,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-level validation problem, e.g. `deps[2].name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Application-specific errors for SBOM operations.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Only `InvalidInput` is a caller contract violation; every other
/// variant is reported as an internal error.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        details: Vec<FieldError>,
    },

    #[error("Malformed {format} document at index {index}: {details}")]
    MalformedDocument {
        index: usize,
        format: String,
        details: String,
    },

    #[error("Failed to serialize output: {details}")]
    Serialization { details: String },

    #[error("Input schema of {tool} is unusable: {details}")]
    InvalidSchema { tool: String, details: String },

    #[error("Failed to load config file: {path}\nDetails: {details}\n\n💡 Hint: Check that the file exists and contains valid YAML")]
    ConfigError { path: PathBuf, details: String },
}

impl SbomError {
    /// Builds an `InvalidInput` error without field details
    pub fn invalid_input(message: impl Into<String>) -> Self {
        SbomError::InvalidInput {
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SbomError::InvalidInput { .. } => ErrorCode::InvalidInput,
            SbomError::MalformedDocument { .. }
            | SbomError::Serialization { .. }
            | SbomError::InvalidSchema { .. }
            | SbomError::ConfigError { .. } => ErrorCode::InternalError,
        }
    }

    pub fn details(&self) -> &[FieldError] {
        match self {
            SbomError::InvalidInput { details, .. } => details,
            _ => &[],
        }
    }
}

impl From<serde_json::Error> for SbomError {
    fn from(err: serde_json::Error) -> Self {
        SbomError::Serialization {
            details: err.to_string(),
        }
    }
}
