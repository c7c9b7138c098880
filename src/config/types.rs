//! Configuration types and defaults for taskprompt.

use crate::prompt::{OverrideMode, OverrideRule};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::warn;

/// Valid logical prompt names (`UPDATE_TASK_CONTENT`, ...).
pub(crate) static PROMPT_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("Invalid prompt name regex"));

/// Environment variable selecting the template set.
pub const TEMPLATES_USE_ENV: &str = "TEMPLATES_USE";

/// Environment variable pointing at the custom template root.
pub const DATA_DIR_ENV: &str = "DATA_DIR";

// Default value functions for serde
pub(crate) fn default_templates_use() -> String {
    "en".to_string()
}

/// One entry of the `overrides` map.
///
/// Entries are parsed leniently so that a bad override never makes the whole
/// config unreadable; [`OverrideEntry::to_rule`] turns anything unusable into
/// "no override".
///
/// ```yaml
/// overrides:
///   UPDATE_TASK_CONTENT: "Plain text replaces the report."
///   OTHER_PROMPT:
///     mode: append
///     content: "Added after a blank line."
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverrideEntry {
    /// Bare string: replacement text.
    Text(String),
    /// Explicit mode and content.
    Rule {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mode: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    /// Anything else; kept for round-tripping but never applied.
    Other(serde_yaml::Value),
}

impl OverrideEntry {
    /// Convert to an applicable rule, or `None` when the entry is malformed.
    pub fn to_rule(&self, name: &str) -> Option<OverrideRule> {
        match self {
            OverrideEntry::Text(content) => Some(OverrideRule::replace(content.clone())),
            OverrideEntry::Rule { mode, content } => {
                let Some(content) = content else {
                    warn!(name, "override has no content, ignoring");
                    return None;
                };
                let mode = match mode.as_deref() {
                    None => OverrideMode::default(),
                    Some(raw) => match OverrideMode::from_str(raw) {
                        Some(mode) => mode,
                        None => {
                            warn!(name, mode = raw, "unknown override mode, ignoring");
                            return None;
                        }
                    },
                };
                Some(OverrideRule::new(mode, content.clone()))
            }
            OverrideEntry::Other(_) => {
                warn!(name, "override is neither text nor a mode/content map, ignoring");
                None
            }
        }
    }
}

/// Deserialize the `overrides` map without ever failing.
///
/// A missing or `null` section is empty. A section that is not a map, or a
/// key that is not a string, is dropped with a warning.
pub(crate) fn deserialize_overrides<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, OverrideEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;

    let mapping = match value {
        serde_yaml::Value::Null => return Ok(BTreeMap::new()),
        serde_yaml::Value::Mapping(mapping) => mapping,
        _ => {
            warn!("overrides section is not a map, ignoring it");
            return Ok(BTreeMap::new());
        }
    };

    let mut overrides = BTreeMap::new();
    for (key, entry) in mapping {
        let Some(name) = key.as_str() else {
            warn!(key = ?key, "override name is not a string, ignoring");
            continue;
        };
        let entry = serde_yaml::from_value(entry.clone()).unwrap_or(OverrideEntry::Other(entry));
        overrides.insert(name.to_string(), entry);
    }
    Ok(overrides)
}
