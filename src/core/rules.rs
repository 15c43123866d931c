//! Acceptance rules
//!
//! Each rule is a pure predicate over an already-normalized candidate.

use crate::dictionary::SpellChecker;

/// Language tag passed to the spell checker
pub const LANGUAGE: &str = "en";

/// Check that the candidate has not been used yet in this session
#[must_use]
pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}

/// Check that the candidate can be spelled from the root word's letters
///
/// The root is treated as a multiset: each letter of the candidate consumes
/// one remaining occurrence, so a letter can be used at most as many times
/// as it appears in the root.
///
/// # Examples
/// ```
/// use word_scramble::core::rules::is_possible;
///
/// assert!(is_possible("brain", "rainbow"));
/// assert!(!is_possible("rainn", "rainbow"));
/// ```
#[must_use]
pub fn is_possible(word: &str, root: &str) -> bool {
    let mut remaining: Vec<char> = root.chars().collect();

    for letter in word.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.swap_remove(pos);
            }
            None => return false,
        }
    }

    true
}

/// Check that the spell checker recognizes the whole word
#[must_use]
pub fn is_real<S: SpellChecker + ?Sized>(word: &str, checker: &S) -> bool {
    !checker.is_misspelled(word, LANGUAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use proptest::prelude::*;
    use rustc_hash::FxHashMap;

    fn used(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn original_when_list_empty() {
        assert!(is_original("rain", &[]));
    }

    #[test]
    fn not_original_when_present_anywhere() {
        let list = used(&["brain", "rain", "bow"]);
        assert!(!is_original("brain", &list));
        assert!(!is_original("rain", &list));
        assert!(!is_original("bow", &list));
        assert!(is_original("barn", &list));
    }

    #[test]
    fn possible_uses_each_letter_once() {
        assert!(is_possible("brain", "rainbow"));
        assert!(is_possible("rainbow", "rainbow"));
        assert!(!is_possible("rainn", "rainbow"));
        assert!(!is_possible("bob", "rainbow"));
    }

    #[test]
    fn possible_respects_repeated_root_letters() {
        assert!(is_possible("ground", "playground"));
        assert!(!is_possible("plays", "playground"));
        assert!(is_possible("lee", "sleeper"));
        assert!(is_possible("seep", "sleeper"));
        assert!(!is_possible("peeps", "sleeper"));
        assert!(!is_possible("eeee", "sleeper"));
    }

    #[test]
    fn possible_order_does_not_matter() {
        assert!(is_possible("ray", "bakry"));
        assert!(is_possible("yar", "bakry"));
        assert!(!is_possible("raak", "bakry"));
    }

    #[test]
    fn empty_word_is_possible() {
        assert!(is_possible("", "rainbow"));
    }

    #[test]
    fn real_uses_dictionary() {
        let dictionary = WordListDictionary::from_words(["rain", "brain"], LANGUAGE);
        assert!(is_real("rain", &dictionary));
        assert!(!is_real("rainb", &dictionary));
    }

    #[test]
    fn real_rejects_other_language_dictionary() {
        let dictionary = WordListDictionary::from_words(["sade"], "fi");
        assert!(!is_real("sade", &dictionary));
    }

    fn letter_counts(text: &str) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for ch in text.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    proptest! {
        #[test]
        fn possible_matches_multiset_subset(word in "[a-e]{0,8}", root in "[a-e]{0,8}") {
            let word_counts = letter_counts(&word);
            let root_counts = letter_counts(&root);
            let subset = word_counts
                .iter()
                .all(|(ch, n)| root_counts.get(ch).copied().unwrap_or(0) >= *n);

            prop_assert_eq!(is_possible(&word, &root), subset);
        }

        #[test]
        fn any_permutation_of_root_is_possible(root in "[a-z]{1,10}", seed in any::<u64>()) {
            use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

            let mut letters: Vec<char> = root.chars().collect();
            letters.shuffle(&mut StdRng::seed_from_u64(seed));
            let shuffled: String = letters.into_iter().collect();

            prop_assert!(is_possible(&shuffled, &root));
        }
    }
}
