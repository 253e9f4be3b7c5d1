/// Width of the `=` and `-` rules printed between sections.
pub const RULE_WIDTH: usize = 50;

/// The first `max_chars` characters of `s`, cut on a char boundary.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

pub fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Header line placed before each page's text in full extraction output.
pub fn page_delimiter(page_number: usize) -> String {
    format!("\n--- Page {page_number} ---\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let s = "ページ数テスト";
        assert_eq!(truncate_chars(s, 3), "ページ");
        assert_eq!(truncate_chars(s, 3).len(), 9);
    }

    #[test]
    fn truncate_shorter_or_equal_is_identity() {
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn truncate_to_zero() {
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn rules_are_fifty_wide() {
        assert_eq!(heavy_rule().chars().count(), 50);
        assert!(light_rule().chars().all(|c| c == '-'));
    }
}
