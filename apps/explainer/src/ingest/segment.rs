//! Profile segmentation and character-limit truncation.

/// Line of 50 hyphens followed by a blank line, delimiting candidate profiles.
pub const PROFILE_SEPARATOR: &str =
    "--------------------------------------------------\n\n";

/// Splits the profiles document on `PROFILE_SEPARATOR`.
///
/// `k` separators always yield `k + 1` records in document order. Empty
/// records (leading, trailing or between adjacent separators) are kept.
pub fn split_profiles(text: &str) -> Vec<&str> {
    text.split(PROFILE_SEPARATOR).collect()
}

/// Returns the first `max_chars` characters of `text`, or all of it when shorter.
/// Counts Unicode scalar values, never bytes.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_is_fifty_hyphens_and_blank_line() {
        assert_eq!(PROFILE_SEPARATOR, format!("{}\n\n", "-".repeat(50)));
    }

    #[test]
    fn test_k_separators_yield_k_plus_one_records() {
        let text = format!("Alice{PROFILE_SEPARATOR}Bob{PROFILE_SEPARATOR}Carol");
        assert_eq!(split_profiles(&text), vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_no_separator_yields_whole_text() {
        assert_eq!(split_profiles("Only one profile"), vec!["Only one profile"]);
    }

    #[test]
    fn test_empty_records_are_not_filtered() {
        let text = format!("{PROFILE_SEPARATOR}Alice{PROFILE_SEPARATOR}{PROFILE_SEPARATOR}");
        assert_eq!(split_profiles(&text), vec!["", "Alice", "", ""]);
    }

    #[test]
    fn test_records_concatenate_back_to_source() {
        let text = format!("A\nline{PROFILE_SEPARATOR}B\n\nmore{PROFILE_SEPARATOR}C");
        let rejoined = split_profiles(&text).join(PROFILE_SEPARATOR);
        assert_eq!(rejoined, text);
    }

    #[test]
    fn test_shorter_hyphen_run_is_not_a_separator() {
        let text = format!("Alice\n{}\n\nBob", "-".repeat(49));
        assert_eq!(split_profiles(&text).len(), 1);
    }

    #[test]
    fn test_truncate_to_exact_limit() {
        let text = "x".repeat(600);
        assert_eq!(truncate_chars(&text, 500).chars().count(), 500);
    }

    #[test]
    fn test_truncate_leaves_short_text_untouched() {
        assert_eq!(truncate_chars("short", 500), "short");
        assert_eq!(truncate_chars("", 3000), "");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "é".repeat(10);
        let truncated = truncate_chars(&text, 4);
        assert_eq!(truncated, "éééé");
        assert_eq!(truncated.len(), 8);
    }
}
