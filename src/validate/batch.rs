//! Batch validation: per-file aggregation across all rules.

use super::rules::{evaluate_rule, matches_accepted_formats};
use super::types::{BatchValidationResult, ErrorRecord, Rejection};
use crate::catalog::{ErrorKind, MessageCatalog};
use crate::constraints::Constraints;
use crate::file::FileInfo;

/// Validate a batch of files against constraints and a message catalog.
///
/// Rules run per file in fixed order: file-count limit, accepted formats,
/// maximum size, minimum size. Every rule runs even after an earlier one
/// violated, so a single file can carry several violations, listed in that
/// order. Files with no violations are omitted from the result; rejections
/// keep the input ordering.
///
/// The call never fails: an absent constraint is a no-op and malformed
/// files (for example a zero-length name) are evaluated like any other.
///
/// # Examples
///
/// ```
/// use filesift::catalog::MessageCatalog;
/// use filesift::constraints::Constraints;
/// use filesift::file::FileInfo;
/// use filesift::validate::validate_batch;
///
/// let files = vec![FileInfo::new("notes.txt", 120, "text/plain")];
/// let constraints = Constraints::none().with_max_size(1024);
///
/// let result = validate_batch(&files, &constraints, &MessageCatalog::defaults());
/// assert!(result.passed);
/// ```
pub fn validate_batch(
    files: &[FileInfo],
    constraints: &Constraints,
    catalog: &MessageCatalog,
) -> BatchValidationResult {
    let count_ok = count_within_limit(files, constraints);
    let mut rejections = Vec::new();

    for file in files {
        let errors = evaluate_file(file, count_ok, constraints, catalog);
        if !errors.is_empty() {
            rejections.push(Rejection::new(file.clone(), errors));
        }
    }

    if rejections.is_empty() {
        BatchValidationResult::pass()
    } else {
        BatchValidationResult::fail(rejections)
    }
}

/// Split a batch into accepted files and rejections in one pass.
///
/// Names are display-only, so membership is decided positionally: a batch
/// holding two same-named files can accept one and reject the other.
pub fn partition_batch(
    files: &[FileInfo],
    constraints: &Constraints,
    catalog: &MessageCatalog,
) -> (Vec<FileInfo>, Vec<Rejection>) {
    let count_ok = count_within_limit(files, constraints);
    let mut accepted = Vec::new();
    let mut rejections = Vec::new();

    for file in files {
        let errors = evaluate_file(file, count_ok, constraints, catalog);
        if errors.is_empty() {
            accepted.push(file.clone());
        } else {
            rejections.push(Rejection::new(file.clone(), errors));
        }
    }

    (accepted, rejections)
}

/// The file-count condition is batch-scoped: it depends on the total count
/// only, so an oversized batch puts every file over the limit, not just the
/// excess tail.
fn count_within_limit(files: &[FileInfo], constraints: &Constraints) -> bool {
    constraints.max_files.map_or(true, |max| files.len() <= max)
}

/// Run all four rules against one file, in rule order, without short-circuit.
fn evaluate_file(
    file: &FileInfo,
    count_ok: bool,
    constraints: &Constraints,
    catalog: &MessageCatalog,
) -> Vec<ErrorRecord> {
    let type_ok = match &constraints.accepted_formats {
        None => true,
        Some(patterns) => matches_accepted_formats(file, patterns),
    };
    let max_ok = constraints.max_size.map_or(true, |max| file.size <= max);
    let min_ok = constraints.min_size.map_or(true, |min| file.size >= min);

    [
        (ErrorKind::TooManyFiles, count_ok),
        (ErrorKind::FileInvalidType, type_ok),
        (ErrorKind::FileTooLarge, max_ok),
        (ErrorKind::FileTooSmall, min_ok),
    ]
    .into_iter()
    .filter_map(|(code, satisfied)| evaluate_rule(code, satisfied, catalog))
    .collect()
}
