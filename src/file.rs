//! File descriptors and batch manifests for filesift.
//!
//! The engine never reads file contents: a candidate file is described
//! entirely by its name, byte size, and MIME type. Descriptors come from two
//! sources:
//! - real paths on disk (size from metadata, type inferred from the extension)
//! - a YAML manifest listing the batch declaratively

use crate::error::{FilesiftError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A candidate file presented to the validation engine.
///
/// `name` is a display identifier, not a uniqueness key: a batch may carry
/// two entries with the same name, and the engine tells them apart by
/// position only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Display name, typically the bare file name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type, e.g. `text/plain`. May be empty when unknown.
    #[serde(rename = "type", default)]
    pub mime_type: String,
}

impl FileInfo {
    /// Create a file descriptor from its parts.
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Build a descriptor for a real file on disk.
    ///
    /// The size comes from filesystem metadata; the MIME type is inferred
    /// from the file extension and left empty when the extension is unknown.
    ///
    /// # Returns
    ///
    /// * `Ok(FileInfo)` - Descriptor for the file
    /// * `Err(FilesiftError::UserError)` - Path is missing, unreadable, or
    ///   not a regular file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let metadata = std::fs::metadata(path).map_err(|e| {
            FilesiftError::UserError(format!("failed to read '{}': {}", path.display(), e))
        })?;

        if !metadata.is_file() {
            return Err(FilesiftError::UserError(format!(
                "'{}' is not a regular file",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mime_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(mime_for_extension)
            .unwrap_or("")
            .to_string();

        Ok(Self {
            name,
            size: metadata.len(),
            mime_type,
        })
    }
}

/// Look up the MIME type for a file extension (without the leading dot).
///
/// The lookup is case-insensitive. Returns `None` for unknown extensions;
/// callers map that to an empty type string.
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "bmp" => Some("image/bmp"),
        "pdf" => Some("application/pdf"),
        "txt" => Some("text/plain"),
        "md" => Some("text/markdown"),
        "csv" => Some("text/csv"),
        "html" | "htm" => Some("text/html"),
        "css" => Some("text/css"),
        "js" => Some("text/javascript"),
        "json" => Some("application/json"),
        "yaml" | "yml" => Some("application/yaml"),
        "xml" => Some("application/xml"),
        "zip" => Some("application/zip"),
        "gz" => Some("application/gzip"),
        "tar" => Some("application/x-tar"),
        "mp3" => Some("audio/mpeg"),
        "wav" => Some("audio/wav"),
        "mp4" => Some("video/mp4"),
        "webm" => Some("video/webm"),
        _ => None,
    }
}

/// A declarative batch of files, loaded from YAML.
///
/// Manifests drive the engine without touching the filesystem:
///
/// ```yaml
/// files:
///   - name: report.pdf
///     size: 48213
///     type: application/pdf
///   - name: cover.png
///     size: 1039
///     type: image/png
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Files in the batch, in selection order.
    #[serde(default)]
    pub files: Vec<FileInfo>,
}

impl Manifest {
    /// Load a manifest from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            FilesiftError::UserError(format!(
                "failed to read manifest file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a manifest from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| FilesiftError::UserError(format!("failed to parse manifest YAML: {}", e)))
    }
}
