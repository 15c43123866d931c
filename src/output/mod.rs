//! Terminal output formatting
//!
//! Display utilities for the game prompt and CLI results.

pub mod display;
pub mod formatters;

pub use display::{
    TerminalReporter, print_check_result, print_root_word, print_used_words, print_words_result,
};
