#[inline]
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[inline]
pub fn safe_truncate_ellipsis(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        format!("{}...", s.chars().take(max_chars).collect::<String>())
    } else {
        s.to_string()
    }
}

/// Collapse runs of whitespace to single spaces and trim the ends.
#[inline]
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whole-word containment: `word` must appear as a full alphanumeric run,
/// not as a substring of a longer word.
pub fn contains_word(haystack: &str, word: &str) -> bool {
    haystack.split(|c: char| !c.is_ascii_alphanumeric()).any(|token| token == word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_truncate_ascii() {
        assert_eq!(safe_truncate("paneer butter masala", 6), "paneer");
    }

    #[test]
    fn test_safe_truncate_multibyte() {
        assert_eq!(safe_truncate("crème brûlée", 5), "crème");
    }

    #[test]
    fn test_safe_truncate_shorter() {
        assert_eq!(safe_truncate("dal", 10), "dal");
    }

    #[test]
    fn test_safe_truncate_ellipsis() {
        assert_eq!(safe_truncate_ellipsis("paneer butter masala", 6), "paneer...");
        assert_eq!(safe_truncate_ellipsis("dal", 10), "dal");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  veg \t curry \n under 20  "), "veg curry under 20");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_contains_word() {
        assert!(contains_word("north indian street food", "indian"));
        assert!(contains_word("indian-style", "indian"));
        assert!(!contains_word("indiana", "indian"));
        assert!(!contains_word("", "indian"));
    }
}
