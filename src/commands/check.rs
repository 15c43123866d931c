//! Non-interactive checking of a list of words

use crate::core::{RootWord, SessionState};
use crate::dictionary::SpellChecker;
use crate::validator::{ValidationResult, Validator};

/// One submitted word and what happened to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEntry {
    pub input: String,
    pub result: ValidationResult,
}

/// Result of submitting several words against one session
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub root: RootWord,
    pub entries: Vec<CheckEntry>,
    pub final_state: SessionState,
}

impl CheckResult {
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.entries.iter().filter(|e| e.result.is_accepted()).count()
    }
}

/// Submit each input in order, threading the session through
pub fn check_words<S, I, T>(validator: &Validator<S>, state: SessionState, inputs: I) -> CheckResult
where
    S: SpellChecker,
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let root = state.root().clone();
    let mut state = state;
    let mut entries = Vec::new();

    for input in inputs {
        let input = input.into();
        let (result, next) = validator.submit(&input, state);
        state = next;
        entries.push(CheckEntry { input, result });
    }

    CheckResult {
        root,
        entries,
        final_state: state,
    }
}
