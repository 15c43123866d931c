//! Core domain types for Word Scramble

pub mod rules;
pub mod session;
pub mod word;

pub use rules::{LANGUAGE, is_original, is_possible, is_real};
pub use session::SessionState;
pub use word::{DEFAULT_ROOT_WORD, RootWord, WordError, normalize};
