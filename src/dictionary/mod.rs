//! Dictionary lookup
//!
//! The validator only needs a yes/no misspelling predicate, expressed by the
//! [`SpellChecker`] trait. [`WordListDictionary`] is the offline
//! implementation backed by a word list.

use crate::core::{RootWord, is_possible};
use crate::error::LoadError;
use crate::wordlists::{DICTIONARY, loader::read_lines};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Something that can tell whether a word is misspelled
pub trait SpellChecker {
    /// Returns `true` if `word` is not a recognized word in `language`
    fn is_misspelled(&self, word: &str, language: &str) -> bool;
}

/// Offline dictionary holding a set of known lowercase words
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from any list of words
    ///
    /// Words are trimmed and lowercased; blank entries are ignored.
    pub fn from_words<I, S>(words: I, language: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// The embedded English dictionary
    #[must_use]
    pub fn english() -> Self {
        Self::from_words(DICTIONARY, "en")
    }

    /// Load a newline-delimited dictionary file
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Dictionary` if the file cannot be read.
    pub fn load_from_file<P: AsRef<Path>>(
        path: P,
        language: impl Into<String>,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let lines = read_lines(path).map_err(|source| LoadError::Dictionary {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_words(lines, language);
        tracing::debug!(
            path = %path.display(),
            words = dictionary.len(),
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    #[inline]
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the dictionary knows `word` (exact, lowercase match)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate over all known words in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl SpellChecker for WordListDictionary {
    fn is_misspelled(&self, word: &str, language: &str) -> bool {
        if !self.language.eq_ignore_ascii_case(language) {
            return true;
        }
        !self.words.contains(word)
    }
}

/// Every dictionary word that can be spelled from the root's letters
///
/// The root word itself is left out. Results are sorted by length, then
/// alphabetically.
#[must_use]
pub fn possible_words(dictionary: &WordListDictionary, root: &RootWord) -> Vec<String> {
    let root = root.text();
    let root_len = root.chars().count();

    let words: Vec<&String> = dictionary.words.iter().collect();
    let mut found: Vec<String> = words
        .par_iter()
        .filter(|word| word.as_str() != root)
        .filter(|word| word.chars().count() <= root_len)
        .filter(|word| is_possible(word, root))
        .map(|word| (*word).clone())
        .collect();

    found.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_words_normalizes() {
        let dictionary = WordListDictionary::from_words(["Rain", " brain ", "", "rain"], "en");
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("rain"));
        assert!(dictionary.contains("brain"));
        assert_eq!(dictionary.language(), "en");
    }

    #[test]
    fn misspelled_when_unknown() {
        let dictionary = WordListDictionary::from_words(["rain"], "en");
        assert!(!dictionary.is_misspelled("rain", "en"));
        assert!(dictionary.is_misspelled("rian", "en"));
    }

    #[test]
    fn misspelled_when_language_differs() {
        let dictionary = WordListDictionary::from_words(["rain"], "en");
        assert!(dictionary.is_misspelled("rain", "fi"));
        assert!(!dictionary.is_misspelled("rain", "EN"));
    }

    #[test]
    fn english_knows_common_words() {
        let dictionary = WordListDictionary::english();
        assert!(!dictionary.is_empty());
        for word in ["play", "rain", "brain", "ground", "playground"] {
            assert!(!dictionary.is_misspelled(word, "en"), "{word}");
        }
        assert!(dictionary.is_misspelled("bakry", "en"));
        assert!(dictionary.is_misspelled("xqzt", "en"));
    }

    #[test]
    fn load_missing_file_errors() {
        let result = WordListDictionary::load_from_file("/nonexistent/dictionary.txt", "en");
        assert!(matches!(result, Err(LoadError::Dictionary { .. })));
    }

    #[test]
    fn possible_words_sorted_and_excludes_root() {
        let dictionary = WordListDictionary::from_words(
            ["rainbow", "brain", "rain", "bow", "robin", "rainn", "bob", "ran"],
            "en",
        );
        let root = RootWord::new("rainbow").unwrap();

        assert_eq!(
            possible_words(&dictionary, &root),
            vec!["bow", "ran", "rain", "brain", "robin"]
        );
    }

    #[test]
    fn possible_words_empty_dictionary() {
        let dictionary = WordListDictionary::from_words(Vec::<String>::new(), "en");
        let root = RootWord::new("rainbow").unwrap();
        assert!(possible_words(&dictionary, &root).is_empty());
    }
}
