//! Template lookup by path-like key.
//!
//! Every report variant lives under `updateTaskContent/` in a template set
//! (`en`, `zh`). [`LayeredTemplateStore`] resolves a key in this order:
//!
//! 1. `<data_dir>/<templates_use>/<key>` on disk, when a data directory is set
//! 2. the built-in set named by `templates_use`
//! 3. the built-in `en` set

use crate::config::Config;
use crate::error::{PromptError, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Template set used when the requested one lacks a key.
pub const FALLBACK_TEMPLATE_SET: &str = "en";

/// The template bodies used by the update-task-content report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateVariant {
    NotFound,
    Validation,
    EmptyUpdate,
    Success,
    FileDetails,
    Index,
}

impl TemplateVariant {
    pub const ALL: [TemplateVariant; 6] = [
        TemplateVariant::NotFound,
        TemplateVariant::Validation,
        TemplateVariant::EmptyUpdate,
        TemplateVariant::Success,
        TemplateVariant::FileDetails,
        TemplateVariant::Index,
    ];

    /// Store key of this variant.
    pub fn key(&self) -> &'static str {
        match self {
            TemplateVariant::NotFound => "updateTaskContent/notFound.md",
            TemplateVariant::Validation => "updateTaskContent/validation.md",
            TemplateVariant::EmptyUpdate => "updateTaskContent/emptyUpdate.md",
            TemplateVariant::Success => "updateTaskContent/success.md",
            TemplateVariant::FileDetails => "updateTaskContent/fileDetails.md",
            TemplateVariant::Index => "updateTaskContent/index.md",
        }
    }
}

/// Source of raw template bodies.
pub trait TemplateStore {
    /// Load the raw body stored under `key`.
    fn load(&self, key: &str) -> Result<String>;

    /// Load the body of a report variant.
    fn load_variant(&self, variant: TemplateVariant) -> Result<String> {
        self.load(variant.key())
    }
}

/// Template sets compiled into the binary.
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    /// Names of the built-in template sets.
    pub const SETS: [&'static str; 2] = ["en", "zh"];

    /// Look up a built-in template body.
    pub fn get(set: &str, key: &str) -> Option<&'static str> {
        let body = match (set, key) {
            ("en", "updateTaskContent/index.md") => {
                include_str!("../../templates/en/updateTaskContent/index.md")
            }
            ("en", "updateTaskContent/notFound.md") => {
                include_str!("../../templates/en/updateTaskContent/notFound.md")
            }
            ("en", "updateTaskContent/validation.md") => {
                include_str!("../../templates/en/updateTaskContent/validation.md")
            }
            ("en", "updateTaskContent/emptyUpdate.md") => {
                include_str!("../../templates/en/updateTaskContent/emptyUpdate.md")
            }
            ("en", "updateTaskContent/success.md") => {
                include_str!("../../templates/en/updateTaskContent/success.md")
            }
            ("en", "updateTaskContent/fileDetails.md") => {
                include_str!("../../templates/en/updateTaskContent/fileDetails.md")
            }
            ("zh", "updateTaskContent/index.md") => {
                include_str!("../../templates/zh/updateTaskContent/index.md")
            }
            ("zh", "updateTaskContent/notFound.md") => {
                include_str!("../../templates/zh/updateTaskContent/notFound.md")
            }
            ("zh", "updateTaskContent/validation.md") => {
                include_str!("../../templates/zh/updateTaskContent/validation.md")
            }
            ("zh", "updateTaskContent/emptyUpdate.md") => {
                include_str!("../../templates/zh/updateTaskContent/emptyUpdate.md")
            }
            ("zh", "updateTaskContent/success.md") => {
                include_str!("../../templates/zh/updateTaskContent/success.md")
            }
            ("zh", "updateTaskContent/fileDetails.md") => {
                include_str!("../../templates/zh/updateTaskContent/fileDetails.md")
            }
            _ => return None,
        };
        Some(body)
    }
}

/// Resolves keys against an optional custom directory, then the built-ins.
#[derive(Debug, Clone)]
pub struct LayeredTemplateStore {
    templates_use: String,
    data_dir: Option<PathBuf>,
}

impl LayeredTemplateStore {
    pub fn new(templates_use: impl Into<String>, data_dir: Option<PathBuf>) -> Self {
        Self {
            templates_use: templates_use.into(),
            data_dir,
        }
    }

    /// Build a store from the effective configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.templates_use.clone(), config.data_dir.clone())
    }

    /// Path a custom template for `key` would be read from, if a data
    /// directory is configured.
    pub fn custom_path(&self, key: &str) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(&self.templates_use).join(key))
    }
}

impl LayeredTemplateStore {
    /// Load the body for `key` together with the layer that supplied it.
    pub fn resolve(&self, key: &str) -> Result<(String, TemplateSource)> {
        validate_key(key)?;

        if let Some(path) = self.custom_path(key) {
            if path.is_file() {
                debug!(key, path = %path.display(), "using custom template");
                let body = std::fs::read_to_string(&path).map_err(|e| PromptError::Io {
                    path: path.clone(),
                    source: e,
                })?;
                return Ok((body, TemplateSource::Custom(path)));
            }
        }

        if let Some(body) = BuiltinTemplates::get(&self.templates_use, key) {
            debug!(key, set = %self.templates_use, "using built-in template");
            return Ok((
                body.to_string(),
                TemplateSource::Builtin(self.templates_use.clone()),
            ));
        }

        if let Some(body) = BuiltinTemplates::get(FALLBACK_TEMPLATE_SET, key) {
            debug!(
                key,
                requested = %self.templates_use,
                "template set lacks key, falling back to '{}'",
                FALLBACK_TEMPLATE_SET
            );
            return Ok((
                body.to_string(),
                TemplateSource::Builtin(FALLBACK_TEMPLATE_SET.to_string()),
            ));
        }

        Err(PromptError::TemplateNotFound {
            key: key.to_string(),
            set: self.templates_use.clone(),
        })
    }
}

impl TemplateStore for LayeredTemplateStore {
    fn load(&self, key: &str) -> Result<String> {
        self.resolve(key).map(|(body, _)| body)
    }
}

/// Where a resolved template body came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// A file under the configured data directory.
    Custom(PathBuf),
    /// A built-in template set, by name.
    Builtin(String),
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Custom(path) => write!(f, "custom: {}", path.display()),
            TemplateSource::Builtin(set) => write!(f, "built-in, set '{}'", set),
        }
    }
}

/// Keys are relative paths without `..`; anything else could escape the
/// data directory.
fn validate_key(key: &str) -> Result<()> {
    let path = Path::new(key);
    let escapes = key.is_empty()
        || path
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
    if escapes {
        return Err(PromptError::UserError(format!(
            "invalid template key '{}': expected a relative path like 'updateTaskContent/index.md'",
            key
        )));
    }
    Ok(())
}

/// In-memory template store.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateStore {
    templates: HashMap<String, String>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding every built-in body of one template set.
    pub fn builtin(set: &str) -> Self {
        let mut store = Self::new();
        for variant in TemplateVariant::ALL {
            if let Some(body) = BuiltinTemplates::get(set, variant.key()) {
                store.insert(variant.key(), body);
            }
        }
        store
    }

    pub fn insert(&mut self, key: impl Into<String>, body: impl Into<String>) {
        self.templates.insert(key.into(), body.into());
    }

    /// Builder-style variant of [`insert`](Self::insert) keyed by report variant.
    pub fn with(mut self, variant: TemplateVariant, body: impl Into<String>) -> Self {
        self.insert(variant.key(), body);
        self
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn load(&self, key: &str) -> Result<String> {
        self.templates
            .get(key)
            .cloned()
            .ok_or_else(|| PromptError::TemplateNotFound {
                key: key.to_string(),
                set: "memory".to_string(),
            })
    }
}
