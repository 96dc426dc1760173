//! Error kinds and the user-facing message catalog.
//!
//! Every constraint the engine can enforce has a fixed [`ErrorKind`]. The
//! [`MessageCatalog`] maps kinds to user-facing message strings and doubles
//! as the rule switchboard: a kind with no catalog entry renders the
//! corresponding rule inert, which is how callers silence one category of
//! validation without removing the numeric limits themselves.

use crate::error::{FilesiftError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// The closed set of constraint-violation categories.
///
/// Variants are declared in rule-evaluation order. The serialized form is
/// the kebab-case wire code (`too-many-files`, `file-invalid-type`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// The batch holds more files than the configured limit.
    TooManyFiles,
    /// The file matched none of the accepted format patterns.
    FileInvalidType,
    /// The file exceeds the maximum size bound.
    FileTooLarge,
    /// The file is below the minimum size bound.
    FileTooSmall,
}

impl ErrorKind {
    /// The wire code for this kind (matches the serde form).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::TooManyFiles => "too-many-files",
            ErrorKind::FileInvalidType => "file-invalid-type",
            ErrorKind::FileTooLarge => "file-too-large",
            ErrorKind::FileTooSmall => "file-too-small",
        }
    }

    /// Parse a kind from its wire code.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "too-many-files" => Some(Self::TooManyFiles),
            "file-invalid-type" => Some(Self::FileInvalidType),
            "file-too-large" => Some(Self::FileTooLarge),
            "file-too-small" => Some(Self::FileTooSmall),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from [`ErrorKind`] to user-facing message.
///
/// The catalog a validation call receives is final: merging custom messages
/// over the defaults happens beforehand, via [`MessageCatalog::with_message`]
/// and [`MessageCatalog::without_message`]. A kind without an entry disables
/// its rule entirely (see [`crate::validate::evaluate_rule`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    messages: BTreeMap<ErrorKind, String>,
}

impl MessageCatalog {
    /// A catalog with no entries: every rule is inert.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in messages, covering all four kinds.
    pub fn defaults() -> Self {
        Self::empty()
            .with_message(
                ErrorKind::TooManyFiles,
                "Maximum allowed number of files exceeded.",
            )
            .with_message(ErrorKind::FileInvalidType, "File type not supported.")
            .with_message(ErrorKind::FileTooLarge, "File is too big.")
            .with_message(ErrorKind::FileTooSmall, "File is too small.")
    }

    /// Set the message for a kind, activating its rule.
    pub fn with_message(mut self, kind: ErrorKind, message: impl Into<String>) -> Self {
        self.messages.insert(kind, message.into());
        self
    }

    /// Remove the message for a kind, rendering its rule inert.
    pub fn without_message(mut self, kind: ErrorKind) -> Self {
        self.messages.remove(&kind);
        self
    }

    /// Look up the message for a kind.
    ///
    /// `None` means the rule for `kind` is disabled: the evaluator never
    /// reports a violation it has no message for.
    pub fn message_for(&self, kind: ErrorKind) -> Option<&str> {
        self.messages.get(&kind).map(String::as_str)
    }

    /// Whether the rule for `kind` can produce violations.
    pub fn is_active(&self, kind: ErrorKind) -> bool {
        self.messages.contains_key(&kind)
    }

    /// Load a catalog from a YAML file.
    ///
    /// The document is a flat mapping from wire code to message; unknown
    /// codes are rejected.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            FilesiftError::UserError(format!(
                "failed to read messages file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a catalog from a YAML string.
    ///
    /// ```yaml
    /// file-too-large: "Keep uploads under 5 MB."
    /// too-many-files: "Pick at most three files."
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| FilesiftError::UserError(format!("failed to parse messages YAML: {}", e)))
    }
}
