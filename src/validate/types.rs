//! Core types for batch validation results and rejections.

use crate::catalog::ErrorKind;
use crate::file::FileInfo;
use serde::{Deserialize, Serialize};

/// A single resolved constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// The violated constraint category.
    pub code: ErrorKind,
    /// The user-facing message, taken verbatim from the catalog.
    pub message: String,
}

impl ErrorRecord {
    /// Create a new error record.
    pub fn new(code: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// A rejected file paired with every rule it violated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// The rejected file.
    pub file: FileInfo,
    /// Violations in rule-evaluation order. Never empty.
    pub errors: Vec<ErrorRecord>,
}

impl Rejection {
    /// Create a new rejection.
    pub fn new(file: FileInfo, errors: Vec<ErrorRecord>) -> Self {
        Self { file, errors }
    }

    /// Whether this rejection includes a violation of `code`.
    pub fn has_code(&self, code: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }
}

/// Result of validating a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchValidationResult {
    /// Whether validation passed (no rejections).
    pub passed: bool,
    /// One record per rejected file, in input order (empty if passed).
    pub rejections: Vec<Rejection>,
}

impl BatchValidationResult {
    /// Create a passing result.
    pub fn pass() -> Self {
        Self {
            passed: true,
            rejections: Vec::new(),
        }
    }

    /// Create a failing result with rejections.
    pub fn fail(rejections: Vec<Rejection>) -> Self {
        Self {
            passed: false,
            rejections,
        }
    }

    /// Format the result as a user-friendly error message.
    ///
    /// One line per violation, so a file rejected for two rules shows up
    /// twice:
    ///
    /// ```text
    /// 2 file(s) rejected:
    ///   x installer.exe  (file-invalid-type: File type not supported.)
    ///   x installer.exe  (file-too-large: File is too big.)
    ///   x icon.svg  (file-too-small: File is too small.)
    /// ```
    pub fn format_error(&self) -> String {
        if self.passed {
            return String::new();
        }

        let mut msg = format!("{} file(s) rejected:\n", self.rejections.len());

        for rejection in &self.rejections {
            for error in &rejection.errors {
                msg.push_str(&format!(
                    "  x {}  ({}: {})\n",
                    rejection.file.name, error.code, error.message
                ));
            }
        }

        msg
    }
}
