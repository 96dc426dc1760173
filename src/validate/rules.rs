//! Rule evaluation for a single constraint.
//!
//! A rule only exists while the catalog carries a message for its kind:
//! [`evaluate_rule`] resolves the catalog entry first and treats a missing
//! entry as "rule disabled", never as "use a default". Callers silence one
//! category of validation by removing its message while keeping the numeric
//! limits in place for whatever else consumes them.

use super::types::ErrorRecord;
use crate::catalog::{ErrorKind, MessageCatalog};
use crate::file::FileInfo;

/// Evaluate one constraint outcome against the message catalog.
///
/// `satisfied` is the already-computed constraint condition (`true` = no
/// violation). The catalog lookup gates everything: no entry for `code`
/// means no violation regardless of `satisfied`.
///
/// Deterministic, no side effects.
///
/// # Examples
///
/// ```
/// use filesift::catalog::{ErrorKind, MessageCatalog};
/// use filesift::validate::evaluate_rule;
///
/// let catalog = MessageCatalog::defaults();
/// assert!(evaluate_rule(ErrorKind::FileTooLarge, true, &catalog).is_none());
///
/// let violation = evaluate_rule(ErrorKind::FileTooLarge, false, &catalog).unwrap();
/// assert_eq!(violation.code, ErrorKind::FileTooLarge);
///
/// // No catalog entry: the rule cannot fire even when the condition fails.
/// let silent = catalog.without_message(ErrorKind::FileTooLarge);
/// assert!(evaluate_rule(ErrorKind::FileTooLarge, false, &silent).is_none());
/// ```
pub fn evaluate_rule(
    code: ErrorKind,
    satisfied: bool,
    catalog: &MessageCatalog,
) -> Option<ErrorRecord> {
    let message = catalog.message_for(code)?;

    if satisfied {
        return None;
    }

    Some(ErrorRecord::new(code, message))
}

/// Check a file against an accepted-format pattern list.
///
/// Returns true when at least one pattern matches. Matching is literal and
/// case-sensitive: a pattern starting with `.` is a file-name suffix, any
/// other pattern is a MIME-type prefix. An empty list matches nothing.
pub fn matches_accepted_formats(file: &FileInfo, patterns: &[String]) -> bool {
    patterns.iter().any(|p| pattern_matches(file, p))
}

/// Match one pattern against one file.
fn pattern_matches(file: &FileInfo, pattern: &str) -> bool {
    if pattern.starts_with('.') {
        file.name.ends_with(pattern)
    } else {
        file.mime_type.starts_with(pattern)
    }
}
