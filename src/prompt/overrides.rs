//! Operator overrides applied to a fully composed report.
//!
//! An override rule is looked up by logical prompt name (for this report,
//! [`UPDATE_TASK_CONTENT`]) through an injected [`OverrideResolver`]. The
//! rule's [`OverrideMode`] decides how its content combines with the
//! composed text. Lookups never fail a render: no rule, or a rule with
//! empty content, passes the composed text through unchanged.
//!
//! # Environment variables
//!
//! [`EnvOverrides`] reads rules from the process environment:
//!
//! - `MCP_PROMPT_<NAME>` replaces the composed text
//! - `MCP_PROMPT_<NAME>_APPEND` appends to it after a blank line
//!
//! When both are set the replacement wins. Literal `\n`, `\t` and `\r`
//! sequences in the values are turned into the corresponding characters,
//! since most shells make real newlines awkward to pass.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Logical prompt name of the update-task-content report.
pub const UPDATE_TASK_CONTENT: &str = "UPDATE_TASK_CONTENT";

/// Prefix shared by all override environment variables.
pub const ENV_PREFIX: &str = "MCP_PROMPT_";

/// Suffix selecting append mode for an override environment variable.
pub const ENV_APPEND_SUFFIX: &str = "_APPEND";

/// Separator placed between composed text and appended/prepended content.
const BLOCK_SEPARATOR: &str = "\n\n";

/// How override content combines with the composed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverrideMode {
    /// The override content replaces the composed text.
    #[default]
    Replace,
    /// The override content follows the composed text after a blank line.
    Append,
    /// The override content precedes the composed text, then a blank line.
    Prepend,
}

impl OverrideMode {
    /// Parse an override mode from a string (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" => Some(Self::Replace),
            "append" => Some(Self::Append),
            "prepend" => Some(Self::Prepend),
            _ => None,
        }
    }
}

/// A resolved override for one prompt name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideRule {
    pub mode: OverrideMode,
    pub content: String,
}

impl OverrideRule {
    pub fn new(mode: OverrideMode, content: impl Into<String>) -> Self {
        Self {
            mode,
            content: content.into(),
        }
    }

    pub fn replace(content: impl Into<String>) -> Self {
        Self::new(OverrideMode::Replace, content)
    }

    pub fn append(content: impl Into<String>) -> Self {
        Self::new(OverrideMode::Append, content)
    }

    pub fn prepend(content: impl Into<String>) -> Self {
        Self::new(OverrideMode::Prepend, content)
    }

    /// Combine this rule with the composed text.
    pub fn apply(&self, composed: String) -> String {
        match self.mode {
            OverrideMode::Replace => self.content.clone(),
            OverrideMode::Append => {
                let mut out = composed;
                out.push_str(BLOCK_SEPARATOR);
                out.push_str(&self.content);
                out
            }
            OverrideMode::Prepend => {
                format!("{}{}{}", self.content, BLOCK_SEPARATOR, composed)
            }
        }
    }
}

/// Looks up the override rule for a logical prompt name.
pub trait OverrideResolver {
    fn resolve(&self, name: &str) -> Option<OverrideRule>;
}

impl<F> OverrideResolver for F
where
    F: Fn(&str) -> Option<OverrideRule>,
{
    fn resolve(&self, name: &str) -> Option<OverrideRule> {
        self(name)
    }
}

/// Resolver with no rules at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl OverrideResolver for NoOverrides {
    fn resolve(&self, _name: &str) -> Option<OverrideRule> {
        None
    }
}

/// Resolvers consulted in order; the first rule found wins.
#[derive(Default)]
pub struct OverrideChain {
    resolvers: Vec<Box<dyn OverrideResolver>>,
}

impl OverrideChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, resolver: impl OverrideResolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }
}

impl OverrideResolver for OverrideChain {
    fn resolve(&self, name: &str) -> Option<OverrideRule> {
        self.resolvers.iter().find_map(|r| r.resolve(name))
    }
}

/// Override rules taken from `MCP_PROMPT_*` environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    vars: HashMap<String, String>,
}

impl EnvOverrides {
    /// Snapshot the override variables of the current process.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build from explicit `(name, value)` pairs; non-override names are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| k.starts_with(ENV_PREFIX))
            .collect();
        Self { vars }
    }

    fn non_empty(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

impl OverrideResolver for EnvOverrides {
    fn resolve(&self, name: &str) -> Option<OverrideRule> {
        let replace_key = format!("{}{}", ENV_PREFIX, name);
        if let Some(value) = self.non_empty(&replace_key) {
            return Some(OverrideRule::replace(unescape_env_value(value)));
        }

        let append_key = format!("{}{}", replace_key, ENV_APPEND_SUFFIX);
        self.non_empty(&append_key)
            .map(|value| OverrideRule::append(unescape_env_value(value)))
    }
}

/// Turn literal `\n`, `\t` and `\r` sequences into control characters.
pub fn unescape_env_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            let replacement = match chars.peek() {
                Some('n') => Some('\n'),
                Some('t') => Some('\t'),
                Some('r') => Some('\r'),
                _ => None,
            };
            if let Some(c) = replacement {
                chars.next();
                out.push(c);
                continue;
            }
        }
        out.push(ch);
    }

    out
}

/// Final step of every composed report: apply the override for `name`.
pub fn apply_override(name: &str, composed: String, resolver: &dyn OverrideResolver) -> String {
    match resolver.resolve(name) {
        None => composed,
        Some(rule) if rule.content.is_empty() => {
            warn!(name, mode = ?rule.mode, "ignoring override with empty content");
            composed
        }
        Some(rule) => {
            debug!(name, mode = ?rule.mode, "applying prompt override");
            rule.apply(composed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn no_rule_passes_through() {
        let out = apply_override(UPDATE_TASK_CONTENT, "body".to_string(), &NoOverrides);
        assert_eq!(out, "body");
    }

    #[test]
    fn replace_rule_replaces() {
        let resolver = |_: &str| Some(OverrideRule::replace("custom"));
        let out = apply_override(UPDATE_TASK_CONTENT, "body".to_string(), &resolver);
        assert_eq!(out, "custom");
    }

    #[test]
    fn append_rule_appends_after_blank_line() {
        let resolver = |_: &str| Some(OverrideRule::append("extra"));
        let out = apply_override(UPDATE_TASK_CONTENT, "body".to_string(), &resolver);
        assert_eq!(out, "body\n\nextra");
    }

    #[test]
    fn prepend_rule_prepends_before_blank_line() {
        let resolver = |_: &str| Some(OverrideRule::prepend("intro"));
        let out = apply_override(UPDATE_TASK_CONTENT, "body".to_string(), &resolver);
        assert_eq!(out, "intro\n\nbody");
    }

    #[test]
    fn empty_content_passes_through() {
        let resolver = |_: &str| Some(OverrideRule::replace(""));
        let out = apply_override(UPDATE_TASK_CONTENT, "body".to_string(), &resolver);
        assert_eq!(out, "body");
    }

    #[test]
    fn resolver_is_keyed_by_name() {
        let resolver = |name: &str| (name == "OTHER").then(|| OverrideRule::replace("x"));
        let out = apply_override(UPDATE_TASK_CONTENT, "body".to_string(), &resolver);
        assert_eq!(out, "body");
    }

    #[test]
    fn mode_parsing() {
        assert_eq!(OverrideMode::from_str("replace"), Some(OverrideMode::Replace));
        assert_eq!(OverrideMode::from_str(" Append "), Some(OverrideMode::Append));
        assert_eq!(OverrideMode::from_str("PREPEND"), Some(OverrideMode::Prepend));
        assert_eq!(OverrideMode::from_str("merge"), None);
    }

    #[test]
    fn env_replace_wins_over_append() {
        let env = EnvOverrides::from_vars([
            ("MCP_PROMPT_UPDATE_TASK_CONTENT", "replaced"),
            ("MCP_PROMPT_UPDATE_TASK_CONTENT_APPEND", "appended"),
        ]);
        assert_eq!(
            env.resolve(UPDATE_TASK_CONTENT),
            Some(OverrideRule::replace("replaced"))
        );
    }

    #[test]
    fn env_append_rule() {
        let env = EnvOverrides::from_vars([("MCP_PROMPT_UPDATE_TASK_CONTENT_APPEND", "more")]);
        assert_eq!(
            env.resolve(UPDATE_TASK_CONTENT),
            Some(OverrideRule::append("more"))
        );
    }

    #[test]
    fn env_empty_values_are_ignored() {
        let env = EnvOverrides::from_vars([
            ("MCP_PROMPT_UPDATE_TASK_CONTENT", ""),
            ("MCP_PROMPT_UPDATE_TASK_CONTENT_APPEND", "more"),
        ]);
        assert_eq!(
            env.resolve(UPDATE_TASK_CONTENT),
            Some(OverrideRule::append("more"))
        );
    }

    #[test]
    fn env_unrelated_vars_are_ignored() {
        let env = EnvOverrides::from_vars([("PATH", "/usr/bin"), ("MCP_PROMPT_OTHER", "x")]);
        assert_eq!(env.resolve(UPDATE_TASK_CONTENT), None);
    }

    #[test]
    fn env_values_are_unescaped() {
        let env = EnvOverrides::from_vars([("MCP_PROMPT_UPDATE_TASK_CONTENT", r"a\nb\tc")]);
        assert_eq!(
            env.resolve(UPDATE_TASK_CONTENT),
            Some(OverrideRule::replace("a\nb\tc"))
        );
    }

    #[test]
    fn unescape_leaves_other_backslashes() {
        assert_eq!(unescape_env_value(r"C:\path\x"), r"C:\path\x");
        assert_eq!(unescape_env_value(r"end\"), r"end\");
        assert_eq!(unescape_env_value(r"\r\n"), "\r\n");
    }

    #[test]
    fn chain_uses_first_match() {
        let chain = OverrideChain::new()
            .with(NoOverrides)
            .with(|_: &str| Some(OverrideRule::append("first")))
            .with(|_: &str| Some(OverrideRule::replace("second")));
        assert_eq!(
            chain.resolve(UPDATE_TASK_CONTENT),
            Some(OverrideRule::append("first"))
        );
    }

    #[test]
    #[serial]
    fn from_env_reads_process_environment() {
        let key = "MCP_PROMPT_TASKPROMPT_TEST_ONLY_APPEND";
        // SAFETY: serialized with other environment-touching tests.
        unsafe { std::env::set_var(key, "from env") };
        let env = EnvOverrides::from_env();
        unsafe { std::env::remove_var(key) };

        assert_eq!(
            env.resolve("TASKPROMPT_TEST_ONLY"),
            Some(OverrideRule::append("from env"))
        );
    }
}
