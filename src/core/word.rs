//! Root word representation
//!
//! A `RootWord` is the fixed word a session is played against. Candidates are
//! plain strings that go through [`normalize`] before any rule sees them.

use std::fmt;
use thiserror::Error;

/// Word used when the root word list has no usable entries
pub const DEFAULT_ROOT_WORD: &str = "bakry";

/// The session's root word
///
/// Always non-empty and lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord {
    text: String,
}

/// Error type for invalid root words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Root word must not be empty")]
    Empty,
    #[error("Root word must be a single word")]
    ContainsWhitespace,
}

impl RootWord {
    /// Create a new root word from a string
    ///
    /// The text is normalized the same way candidate input is.
    ///
    /// # Errors
    /// Returns `WordError` if the normalized text is empty or contains
    /// interior whitespace.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new(" Rainbow\n").unwrap();
    /// assert_eq!(root.text(), "rainbow");
    ///
    /// assert!(RootWord::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::ContainsWhitespace);
        }

        Ok(Self { text })
    }

    /// The fallback root word
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            text: DEFAULT_ROOT_WORD.to_string(),
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the root word
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for RootWord {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Lowercase the input and strip surrounding whitespace and newlines
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_word_creation_valid() {
        let root = RootWord::new("rainbow").unwrap();
        assert_eq!(root.text(), "rainbow");
        assert_eq!(root.letter_count(), 7);
    }

    #[test]
    fn root_word_uppercase_normalized() {
        let root = RootWord::new("PlayGround").unwrap();
        assert_eq!(root.text(), "playground");
    }

    #[test]
    fn root_word_trims_newlines() {
        let root = RootWord::new("silkworm\r\n").unwrap();
        assert_eq!(root.text(), "silkworm");
    }

    #[test]
    fn root_word_rejects_empty() {
        assert_eq!(RootWord::new(""), Err(WordError::Empty));
        assert_eq!(RootWord::new(" \t\n"), Err(WordError::Empty));
    }

    #[test]
    fn root_word_rejects_phrases() {
        assert_eq!(
            RootWord::new("ice cream"),
            Err(WordError::ContainsWhitespace)
        );
    }

    #[test]
    fn fallback_is_lowercase() {
        let root = RootWord::fallback();
        assert_eq!(root.text(), "bakry");
        assert_eq!(root, RootWord::new("Bakry").unwrap());
    }

    #[test]
    fn normalize_mixed_case_and_whitespace() {
        assert_eq!(normalize("  RaIn "), "rain");
        assert_eq!(normalize("\nrain\n"), "rain");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn word_error_messages() {
        assert_eq!(WordError::Empty.to_string(), "Root word must not be empty");
        assert_eq!(
            WordError::ContainsWhitespace.to_string(),
            "Root word must be a single word"
        );
    }

    #[test]
    fn root_word_display() {
        let root = RootWord::new("rainbow").unwrap();
        assert_eq!(format!("{root}"), "rainbow");
    }
}
