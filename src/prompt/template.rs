//! Placeholder substitution for report templates.
//!
//! Templates use `{name}` placeholders:
//!
//! ```text
//! ## Task Update Result: {responseTitle}
//!
//! {message}
//! ```
//!
//! # Syntax
//!
//! - `{name}` is a placeholder when `name` is a non-empty run of ASCII
//!   letters, digits or `_`. Surrounding spaces inside the braces are
//!   trimmed, so `{ name }` works too.
//! - Anything else between braces (`{}`, `{a b}`, JSON, code) is plain text.
//!
//! # Fallback behavior
//!
//! Substitution never fails. A placeholder with no value in the map is left
//! in place verbatim, and so is an unmatched `{`. Values are inserted as-is
//! in a single pass and are never scanned for further placeholders.

use std::collections::HashMap;

/// Render a template string by substituting placeholders.
///
/// # Examples
///
/// ```
/// use taskprompt::prompt::{render_template, vars};
///
/// let vars = vars([("taskId", "T-42")]);
/// let result = render_template("Task {taskId} not found ({reason})", &vars);
/// assert_eq!(result, "Task T-42 not found ({reason})");
/// ```
pub fn render_template(template: &str, variables: &HashMap<String, String>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        // The placeholder ends at the first `}`, but a nested `{` means the
        // outer brace is literal and scanning restarts at the inner one.
        let close = after_open.find(['{', '}']);
        match close {
            Some(end) if after_open.as_bytes()[end] == b'}' => {
                let raw_name = &after_open[..end];
                let name = raw_name.trim_matches(' ');
                match variables.get(name) {
                    Some(value) if is_placeholder_name(name) => result.push_str(value),
                    _ => {
                        result.push('{');
                        result.push_str(raw_name);
                        result.push('}');
                    }
                }
                rest = &after_open[end + 1..];
            }
            _ => {
                result.push('{');
                rest = after_open;
            }
        }
    }

    result.push_str(rest);
    result
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
