//! Loading tasks from JSON or YAML files.

use super::Task;
use crate::error::{PromptError, Result};
use std::path::Path;

impl Task {
    /// Load a task from disk.
    ///
    /// `.json` files are parsed as JSON, `.yaml`/`.yml` as YAML. Any other
    /// extension is tried as JSON first, then YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PromptError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Self::from_json(&content),
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content).or_else(|_| Self::from_yaml(&content)),
        }
    }

    /// Parse a task from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| PromptError::Parse(format!("task JSON: {}", e)))
    }

    /// Parse a task from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::Parse(format!("task YAML: {}", e)))
    }

}
