//! Constraints loading and serialization.

use super::model::Constraints;
use crate::error::{FilesiftError, Result};
use std::path::Path;

impl Constraints {
    /// Load constraints from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the constraints YAML file
    ///
    /// # Returns
    ///
    /// * `Ok(Constraints)` - Successfully loaded constraints
    /// * `Err(FilesiftError::UserError)` - Read or parse error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            FilesiftError::UserError(format!(
                "failed to read constraints file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse constraints from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| {
            FilesiftError::UserError(format!("failed to parse constraints YAML: {}", e))
        })
    }

    /// Serialize constraints to a YAML string. Absent fields are omitted.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            FilesiftError::UserError(format!("failed to serialize constraints to YAML: {}", e))
        })
    }
}
