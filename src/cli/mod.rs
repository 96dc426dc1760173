//! CLI argument parsing for filesift.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Filesift: declarative validation engine for user-selected file batches.
///
/// Constraints (count limit, size bounds, accepted formats) are declared in
/// a YAML file; the batch comes from paths on the command line or from a
/// YAML manifest. Rejected files are reported with every rule they violated.
#[derive(Parser, Debug)]
#[command(name = "filesift")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for filesift.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a batch of files against declarative constraints.
    ///
    /// Prints a per-file verdict and exits non-zero when any file in the
    /// batch is rejected.
    Check(CheckArgs),
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files to validate (mutually exclusive with --manifest).
    pub paths: Vec<PathBuf>,

    /// YAML manifest describing the batch (name/size/type entries).
    #[arg(long, value_name = "FILE", conflicts_with = "paths")]
    pub manifest: Option<PathBuf>,

    /// YAML file with constraint settings (absent fields are unconstrained).
    #[arg(long, value_name = "FILE")]
    pub constraints: Option<PathBuf>,

    /// YAML file mapping error codes to messages (built-in defaults otherwise).
    #[arg(long, value_name = "FILE")]
    pub messages: Option<PathBuf>,

    /// Print the verdict as JSON instead of the human report.
    #[arg(long)]
    pub json: bool,
}
