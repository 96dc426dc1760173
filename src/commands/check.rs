//! Implementation of the `filesift check` command.
//!
//! Collects the batch (real paths or a YAML manifest), loads constraints
//! and messages, runs the validation engine once, and renders the verdict.
//! The engine owns the accept/reject decision; this module only feeds it
//! and reports what it said.

use crate::catalog::MessageCatalog;
use crate::cli::CheckArgs;
use crate::constraints::Constraints;
use crate::error::{FilesiftError, Result};
use crate::file::{FileInfo, Manifest};
use crate::validate::{partition_batch, Rejection};
use serde_json::json;

/// Execute the `filesift check` command.
///
/// # Exit Codes
///
/// - 0: Every file accepted
/// - 1: User error (no batch, unreadable path, invalid YAML)
/// - 2: Validation failure (one or more files rejected)
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let constraints = match &args.constraints {
        Some(path) => Constraints::load(path)?,
        None => Constraints::none(),
    };

    let catalog = match &args.messages {
        Some(path) => MessageCatalog::load(path)?,
        None => MessageCatalog::defaults(),
    };

    let files = collect_batch(&args)?;
    let total = files.len();

    let (accepted, rejections) = partition_batch(&files, &constraints, &catalog);

    if args.json {
        print_json(&accepted, &rejections)?;
    } else {
        print_report(&accepted, &rejections);
    }

    if rejections.is_empty() {
        Ok(())
    } else {
        Err(FilesiftError::ValidationError(format!(
            "{} of {} file(s) rejected",
            rejections.len(),
            total
        )))
    }
}

/// Build the batch from the manifest or from positional paths.
fn collect_batch(args: &CheckArgs) -> Result<Vec<FileInfo>> {
    if let Some(manifest_path) = &args.manifest {
        return Ok(Manifest::load(manifest_path)?.files);
    }

    if args.paths.is_empty() {
        return Err(FilesiftError::UserError(
            "no files to check.\n\n\
             Pass file paths or a batch manifest:\n  \
             filesift check photo.png notes.txt\n  \
             filesift check --manifest batch.yaml"
                .to_string(),
        ));
    }

    args.paths.iter().map(FileInfo::from_path).collect()
}

/// Human-readable verdict on stdout.
fn print_report(accepted: &[FileInfo], rejections: &[Rejection]) {
    for file in accepted {
        println!("  ok {}", file.name);
    }
    for rejection in rejections {
        for error in &rejection.errors {
            println!(
                "  x  {}  ({}: {})",
                rejection.file.name, error.code, error.message
            );
        }
    }

    println!();
    println!("{} accepted, {} rejected", accepted.len(), rejections.len());
}

/// JSON verdict on stdout.
fn print_json(accepted: &[FileInfo], rejections: &[Rejection]) -> Result<()> {
    let payload = json!({
        "accepted": accepted,
        "rejected": rejections,
    });

    let rendered = serde_json::to_string_pretty(&payload)
        .map_err(|e| FilesiftError::UserError(format!("failed to render JSON output: {}", e)))?;
    println!("{}", rendered);

    Ok(())
}
