//! Filesift: declarative validation engine for user-selected file batches.
//!
//! Given a batch of candidate files and a set of declarative constraints
//! (count limit, size bounds, accepted type/extension patterns), filesift
//! partitions the batch into accepted and rejected files, attaching one or
//! more human-readable error records to each rejected file.
//!
//! The engine itself ([`validate`]) is pure: no I/O, no shared state, no
//! failure modes. The surrounding modules supply the declarative inputs
//! ([`constraints`], [`catalog`]), the file descriptors ([`file`]), and the
//! `filesift check` CLI that drives the engine against real paths or a YAML
//! manifest.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod constraints;
pub mod error;
pub mod exit_codes;
pub mod file;
pub mod validate;
