//! Word Scramble
//!
//! Make as many words as you can from the letters of a random root word.
//! Each candidate must be new, spellable from the root's letters, and a real
//! word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{RootWord, SessionState};
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::validator::{ValidationResult, Validator};
//!
//! let validator = Validator::new(WordListDictionary::from_words(["brain"], "en"));
//! let state = SessionState::new(RootWord::new("rainbow").unwrap());
//!
//! let (result, state) = validator.submit("  Brain ", state);
//! assert_eq!(result, ValidationResult::Accepted("brain".to_string()));
//! assert_eq!(state.used_words(), &["brain"]);
//! ```

// Core domain types
pub mod core;

// Word validation
pub mod validator;

// Spell checking
pub mod dictionary;

// Word lists
pub mod wordlists;

// Startup errors
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logging setup
pub mod logging;
