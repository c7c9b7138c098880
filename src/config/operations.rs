//! Config loading, validation, and override lookup.

use super::model::Config;
use super::types::{DATA_DIR_ENV, PROMPT_NAME_REGEX, TEMPLATES_USE_ENV};
use crate::error::{PromptError, Result};
use crate::prompt::{OverrideResolver, OverrideRule};
use std::path::{Path, PathBuf};
use tracing::warn;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `templates_use` must be non-empty and a single path segment
    ///
    /// Override names that do not look like `UPDATE_TASK_CONTENT` are only
    /// warned about: such entries can never match a prompt name, so renders
    /// pass through unchanged.
    pub fn validate(&self) -> Result<()> {
        let set = self.templates_use.trim();
        if set.is_empty() {
            return Err(PromptError::Config(
                "config validation failed: templates_use must not be empty".to_string(),
            ));
        }
        if set.contains(['/', '\\']) || set == "." || set == ".." {
            return Err(PromptError::Config(format!(
                "config validation failed: templates_use must be a template set name, not a path (found '{}')",
                self.templates_use
            )));
        }

        for name in self.overrides.keys() {
            if !PROMPT_NAME_REGEX.is_match(name) {
                warn!(
                    name = %name,
                    "override name is not upper snake case (e.g. UPDATE_TASK_CONTENT), it will never apply"
                );
            }
        }

        Ok(())
    }

    /// Apply `TEMPLATES_USE` and `DATA_DIR` from the given environment.
    ///
    /// Empty values are ignored. The result is validated again.
    pub fn apply_env<I, K, V>(mut self, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in vars {
            let value = value.into();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                TEMPLATES_USE_ENV => self.templates_use = value,
                DATA_DIR_ENV => self.data_dir = Some(PathBuf::from(value)),
                _ => {}
            }
        }

        self.validate()?;
        Ok(self)
    }
}

impl OverrideResolver for Config {
    fn resolve(&self, name: &str) -> Option<OverrideRule> {
        self.overrides.get(name).and_then(|entry| entry.to_rule(name))
    }
}
