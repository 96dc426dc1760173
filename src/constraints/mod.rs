//! Declarative constraints for file-selection validation.
//!
//! This module defines the Constraints struct consumed by one validation
//! call. Every field is an explicit tri-state: absent means the matching
//! rule is always satisfied, present means it is configured with that value.
//! YAML parsing is forward compatible (unknown fields are ignored).

mod model;
mod operations;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Constraints;
