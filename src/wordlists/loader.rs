//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::RootWord;
use crate::error::LoadError;
use std::fs;
use std::io;
use std::path::Path;

/// Read a newline-delimited word file
///
/// Entries are trimmed and lowercased; blank lines are dropped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect();

    Ok(words)
}

/// Load root words from a file
///
/// Returns the valid root words, skipping entries that are not single words.
/// An unreadable file is fatal for session startup and is reported as
/// [`LoadError::WordList`].
///
/// # Errors
///
/// Returns `LoadError::WordList` if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} root words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<RootWord>, LoadError> {
    let path = path.as_ref();
    let lines = read_lines(path).map_err(|source| LoadError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<RootWord> = lines
        .iter()
        .filter_map(|line| RootWord::new(line).ok())
        .collect();

    tracing::debug!(path = %path.display(), count = words.len(), "loaded root word list");
    Ok(words)
}

/// Convert embedded string slice to root words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<RootWord> {
    slice.iter().filter_map(|&s| RootWord::new(s).ok()).collect()
}
