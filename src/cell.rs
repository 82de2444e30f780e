//! Display-width-aware cell helpers for the listing layout.
//!
//! Single call site for width measurement — if we need VS16 stripping or
//! other normalization later, one place to change.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns.
///
/// Thin wrapper around `UnicodeWidthStr::width()`. Emoji = 2, CJK = 2,
/// ASCII = 1.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Left-justify `content` in `target` columns.
///
/// Content already wider than `target` is returned unpadded.
pub fn pad_right(content: &str, target: usize) -> String {
    let pad = target.saturating_sub(display_width(content));
    format!("{}{}", content, " ".repeat(pad))
}

/// Longest prefix of `s` that fits in `target` columns.
///
/// Cuts on a char boundary; a wide char that would straddle the limit is
/// dropped entirely.
pub fn truncate_to_width(s: &str, target: usize) -> &str {
    let mut used = 0;
    for (i, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > target {
            return &s[..i];
        }
        used += w;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("192.168.0.1"), 11);
    }

    #[test]
    fn display_width_cjk() {
        assert_eq!(display_width("漢字"), 4);
    }

    #[test]
    fn pad_right_fills_to_target() {
        assert_eq!(pad_right("abc", 6), "abc   ");
    }

    #[test]
    fn pad_right_wide_content_unpadded() {
        assert_eq!(pad_right("abcdef", 3), "abcdef");
    }

    #[test]
    fn truncate_exact_fit() {
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn truncate_cuts_prefix() {
        assert_eq!(truncate_to_width("hello world", 5), "hello");
    }

    #[test]
    fn truncate_drops_straddling_wide_char() {
        // Second CJK char would occupy columns 3-4; only one char fits in 3.
        assert_eq!(truncate_to_width("漢字", 3), "漢");
    }

    #[test]
    fn truncate_zero_width() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
