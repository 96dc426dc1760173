//! Batch validation engine for filesift.
//!
//! This module owns the only real logic in the crate: mapping a batch of
//! candidate files, a constraint set, and a message catalog to an ordered
//! rejection list.
//!
//! - Rule evaluation: one constraint against one file, gated by the catalog
//! - Batch validation: per-file aggregation across all rules, in fixed order
//!
//! The engine is pure: no I/O, no shared state, and no failure modes. A
//! rejected file is domain data in the result, not an error.

pub mod batch;
pub mod rules;
pub mod types;


pub use batch::{partition_batch, validate_batch};
pub use rules::{evaluate_rule, matches_accepted_formats};
pub use types::{BatchValidationResult, ErrorRecord, Rejection};
