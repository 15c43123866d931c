//! Formatting utilities for terminal output

/// Circled letter count shown next to each used word
///
/// Counts above twenty fall back to a parenthesized number.
#[must_use]
pub fn letter_count_badge(word: &str) -> String {
    const CIRCLED: [char; 20] = [
        '①', '②', '③', '④', '⑤', '⑥', '⑦', '⑧', '⑨', '⑩', '⑪', '⑫', '⑬', '⑭', '⑮', '⑯',
        '⑰', '⑱', '⑲', '⑳',
    ];

    let count = word.chars().count();
    match count.checked_sub(1).and_then(|i| CIRCLED.get(i)) {
        Some(badge) => badge.to_string(),
        None => format!("({count})"),
    }
}

/// Root word spelled out as spaced capitals, e.g. `R A I N B O W`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_for_short_words() {
        assert_eq!(letter_count_badge("a"), "①");
        assert_eq!(letter_count_badge("rain"), "④");
        assert_eq!(letter_count_badge("playground"), "⑩");
    }

    #[test]
    fn badge_for_long_and_empty_words() {
        assert_eq!(letter_count_badge("pneumonoultramicroscopic"), "(24)");
        assert_eq!(letter_count_badge(""), "(0)");
    }

    #[test]
    fn spaced_letters_uppercases() {
        assert_eq!(spaced_letters("rainbow"), "R A I N B O W");
        assert_eq!(spaced_letters(""), "");
    }
}
