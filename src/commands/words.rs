//! List every word that can be made from a root word

use crate::core::RootWord;
use crate::dictionary::{WordListDictionary, possible_words};

/// Words found for one root
#[derive(Debug, Clone)]
pub struct WordsResult {
    pub root: RootWord,
    pub words: Vec<String>,
}

#[must_use]
pub fn list_words(dictionary: &WordListDictionary, root: &RootWord) -> WordsResult {
    let words = possible_words(dictionary, root);
    tracing::info!(root = %root, found = words.len(), "listed possible words");

    WordsResult {
        root: root.clone(),
        words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_words_from_embedded_dictionary() {
        let dictionary = WordListDictionary::english();
        let root = RootWord::new("playground").unwrap();
        let result = list_words(&dictionary, &root);

        assert!(result.words.iter().any(|w| w == "play"));
        assert!(result.words.iter().any(|w| w == "ground"));
        assert!(!result.words.iter().any(|w| w == "plays"));
        assert!(!result.words.iter().any(|w| w == "playground"));
    }
}
