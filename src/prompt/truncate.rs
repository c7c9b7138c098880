//! Length limits for free-text task fields.

/// Maximum number of characters of a free-text field shown in a report.
pub const MAX_FIELD_LENGTH: usize = 100;

/// Marker appended to a truncated field.
pub const ELLIPSIS: &str = "...";

/// Label placed in front of the notes line.
pub const NOTES_PREFIX: &str = "- **Notes:** ";

/// Truncate `value` to `limit` characters, appending [`ELLIPSIS`] when cut.
///
/// Lengths are counted in `char`s, so a multi-byte character is never split.
/// Values of at most `limit` characters are returned unchanged, which also
/// makes the function idempotent for a fixed limit.
pub fn truncate_field(value: &str, limit: usize) -> String {
    match value.char_indices().nth(limit) {
        Some((cut, _)) => {
            let mut truncated = String::with_capacity(cut + ELLIPSIS.len());
            truncated.push_str(&value[..cut]);
            truncated.push_str(ELLIPSIS);
            truncated
        }
        None => value.to_string(),
    }
}

/// Render the optional notes line of the success block.
///
/// Absent or empty notes produce an empty string (no label at all).
pub fn notes_line(notes: Option<&str>) -> String {
    match notes {
        Some(notes) if !notes.is_empty() => format!(
            "{}{}\n",
            NOTES_PREFIX,
            truncate_field(notes, MAX_FIELD_LENGTH)
        ),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_values_are_unchanged() {
        assert_eq!(truncate_field("", MAX_FIELD_LENGTH), "");
        assert_eq!(truncate_field("short", MAX_FIELD_LENGTH), "short");
    }

    #[test]
    fn value_at_limit_is_unchanged() {
        let value = "a".repeat(100);
        assert_eq!(truncate_field(&value, MAX_FIELD_LENGTH), value);
    }

    #[test]
    fn value_over_limit_is_cut_with_ellipsis() {
        let value = "b".repeat(101);
        let truncated = truncate_field(&value, MAX_FIELD_LENGTH);
        assert_eq!(truncated, format!("{}...", "b".repeat(100)));
    }

    #[test]
    fn truncation_is_idempotent() {
        for len in [0, 1, 99, 100, 101, 102, 103, 104, 250] {
            let value: String = "xyz".chars().cycle().take(len).collect();
            let once = truncate_field(&value, MAX_FIELD_LENGTH);
            let twice = truncate_field(&once, MAX_FIELD_LENGTH);
            assert_eq!(once, twice, "not idempotent for length {}", len);
        }
    }

    #[test]
    fn multibyte_characters_are_counted_as_chars() {
        let value = "任".repeat(120);
        let truncated = truncate_field(&value, MAX_FIELD_LENGTH);
        assert_eq!(truncated.chars().count(), 103);
        assert!(truncated.starts_with(&"任".repeat(100)));
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn notes_line_absent_or_empty() {
        assert_eq!(notes_line(None), "");
        assert_eq!(notes_line(Some("")), "");
    }

    #[test]
    fn notes_line_present() {
        assert_eq!(
            notes_line(Some("check the edge cases")),
            "- **Notes:** check the edge cases\n"
        );
    }

    #[test]
    fn notes_line_is_truncated() {
        let notes = "n".repeat(150);
        assert_eq!(
            notes_line(Some(&notes)),
            format!("- **Notes:** {}...\n", "n".repeat(100))
        );
    }
}
