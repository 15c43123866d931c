//! Word lists for Word Scramble
//!
//! Provides the embedded root word and dictionary lists, file loading, and
//! random root word selection.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};

use crate::core::RootWord;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick a root word uniformly at random
///
/// Returns the fallback root word when `words` is empty, so a session can
/// always start once the list itself has been read.
pub fn choose_root_word<R: Rng + ?Sized>(words: &[RootWord], rng: &mut R) -> RootWord {
    if let Some(root) = words.choose(rng) {
        tracing::debug!(root = %root, candidates = words.len(), "chose root word");
        root.clone()
    } else {
        tracing::warn!("root word list is empty, using fallback");
        RootWord::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_valid_roots() {
        for word in START_WORDS {
            let root = RootWord::new(word).unwrap();
            assert_eq!(root.text(), *word, "start word should be lowercase");
        }
    }

    #[test]
    fn start_words_are_in_dictionary() {
        for word in START_WORDS {
            assert!(DICTIONARY.contains(word), "{word} missing from dictionary");
        }
    }

    #[test]
    fn choose_from_single_entry() {
        let words = loader::words_from_slice(&["rainbow"]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(choose_root_word(&words, &mut rng).text(), "rainbow");
    }

    #[test]
    fn choose_is_deterministic_for_seed() {
        let words = loader::words_from_slice(START_WORDS);
        let first = choose_root_word(&words, &mut StdRng::seed_from_u64(42));
        let second = choose_root_word(&words, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn choose_covers_every_entry() {
        let words = loader::words_from_slice(&["rainbow", "playground", "silkworm"]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 3];

        for _ in 0..200 {
            let root = choose_root_word(&words, &mut rng);
            let index = words.iter().position(|w| *w == root).unwrap();
            seen[index] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn choose_from_empty_falls_back() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(choose_root_word(&[], &mut rng), RootWord::fallback());
    }
}
