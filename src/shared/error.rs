use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Partial failures (brands without a recoverable logo) still exit with
/// `Success`; only setup-level problems produce a non-zero code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Run completed, possibly with brands left on the placeholder
    Success = 0,
    /// Missing credential, unusable cache directory, malformed input, etc.
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
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
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Setup-level errors that abort a run.
///
/// Per-candidate and per-brand failures never surface as `LogoError`; they
/// are turned into "try next" control flow inside the pipeline.
#[derive(Debug, Error)]
pub enum LogoError {
    #[error("Missing required credential: {variable}\n\n💡 Hint: {hint}")]
    MissingCredential { variable: String, hint: String },

    #[error("Logo cache directory is not usable: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have read/write permissions")]
    CacheDirectoryError { path: PathBuf, details: String },

    #[error("Failed to parse input file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid JSON")]
    InputParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for builder patterns and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
