//! Constraints struct definition and builders.

use serde::{Deserialize, Serialize};

/// Declarative limits applied to one validation call.
///
/// Absence is meaningful and never conflated with a sentinel: a `None` field
/// means "rule always satisfied", not "limit of zero". Misconfiguration such
/// as a negative size is unrepresentable because sizes and counts are
/// unsigned; beyond that the engine performs no validation of its own
/// configuration. `max_files: Some(0)` is well-defined and puts every
/// non-empty batch over the limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    /// Maximum number of files in the batch.
    ///
    /// Batch-scoped: when the batch exceeds the limit, every file in it is
    /// over the limit, not just the excess tail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_files: Option<usize>,

    /// Inclusive upper bound on file size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,

    /// Inclusive lower bound on file size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<u64>,

    /// Accepted format patterns, in declaration order.
    ///
    /// A pattern starting with `.` matches files whose name ends with that
    /// literal suffix (case-sensitive); any other pattern matches files
    /// whose MIME type starts with it as a literal prefix (case-sensitive).
    ///
    /// `None` accepts every type. `Some(vec![])` is configured-but-empty:
    /// no pattern can match, so every file is rejected for type. The two
    /// are deliberately distinct.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_formats: Option<Vec<String>>,
}

impl Constraints {
    /// Constraints with every field absent: nothing is ever rejected.
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the maximum file count.
    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = Some(max_files);
        self
    }

    /// Set the inclusive maximum size in bytes.
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Set the inclusive minimum size in bytes.
    pub fn with_min_size(mut self, min_size: u64) -> Self {
        self.min_size = Some(min_size);
        self
    }

    /// Set the accepted format patterns.
    pub fn with_accepted_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted_formats = Some(formats.into_iter().map(Into::into).collect());
        self
    }
}
