//! Error types for the filesift CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//!
//! The validation engine itself never produces these: a rejected file is
//! domain data carried in the batch result, not a failure signal. The
//! variants below cover the command layer only.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for filesift operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum FilesiftError {
    /// User provided invalid arguments or unreadable/unparseable input files.
    #[error("{0}")]
    UserError(String),

    /// The check command rejected one or more files.
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl FilesiftError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            FilesiftError::UserError(_) => exit_codes::USER_ERROR,
            FilesiftError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for filesift operations.
pub type Result<T> = std::result::Result<T, FilesiftError>;
