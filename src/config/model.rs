//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Configuration for report composition.
///
/// Loaded from a YAML file; unknown fields are ignored for forward
/// compatibility. `TEMPLATES_USE` and `DATA_DIR` in the environment take
/// precedence over the file (see [`Config::apply_env`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Templates
    // =========================================================================
    /// Template set to render with (`en`, `zh`, or a custom set name).
    #[serde(default = "default_templates_use")]
    pub templates_use: String,

    /// Root of operator-supplied templates, laid out as
    /// `<data_dir>/<templates_use>/updateTaskContent/*.md`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    // =========================================================================
    // Overrides
    // =========================================================================
    /// Override rules keyed by logical prompt name.
    #[serde(
        default,
        deserialize_with = "deserialize_overrides",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub overrides: BTreeMap<String, OverrideEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_use: default_templates_use(),
            data_dir: None,
            overrides: BTreeMap::new(),
        }
    }
}
