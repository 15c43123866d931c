//! Session state
//!
//! Holds the root word and the words accepted so far. The state is a plain
//! value: the validator takes one in and hands a new one back.

use super::RootWord;
use crate::wordlists::choose_root_word;
use rand::Rng;

/// One run of the game, from root word selection until restart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    root: RootWord,
    used_words: Vec<String>,
}

impl SessionState {
    /// Start a session against the given root word
    #[must_use]
    pub fn new(root: RootWord) -> Self {
        Self {
            root,
            used_words: Vec::new(),
        }
    }

    /// Start a session with a root word picked at random from `words`
    ///
    /// Falls back to the default root word when `words` is empty.
    pub fn new_session<R: Rng + ?Sized>(words: &[RootWord], rng: &mut R) -> Self {
        Self::new(choose_root_word(words, rng))
    }

    /// Same root word, no used words
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::new(self.root.clone())
    }

    /// The session's root word
    #[inline]
    #[must_use]
    pub fn root(&self) -> &RootWord {
        &self.root
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Whether `word` has already been accepted
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.used_words.iter().any(|used| used == word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.used_words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used_words.is_empty()
    }

    /// Record an accepted word at the front of the list
    ///
    /// Only the validator's accept path calls this; it has already checked
    /// that the word is new.
    pub(crate) fn accept(mut self, word: String) -> Self {
        debug_assert!(!self.contains(&word));
        self.used_words.insert(0, word);
        self
    }
}
