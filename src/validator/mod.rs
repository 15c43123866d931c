//! Candidate word validation
//!
//! The [`Validator`] applies the acceptance rules in a fixed order and
//! returns a [`ValidationResult`] together with the next session state.
//! Cheap checks run first; the spell checker is consulted last.

mod result;

pub use result::{RejectionKind, ValidationResult};

use crate::core::{SessionState, is_original, is_possible, is_real, normalize};
use crate::dictionary::SpellChecker;

/// Receives rejections the player should see
pub trait ErrorReporter {
    fn report_error(&mut self, title: &str, message: &str);
}

/// Rule switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Turn down a candidate that is the root word itself
    pub reject_root_word: bool,
}

/// Applies the acceptance rules against a spell checker
pub struct Validator<S> {
    checker: S,
    config: ValidatorConfig,
}

impl<S: SpellChecker> Validator<S> {
    /// Create a validator with the default (permissive) rules
    pub fn new(checker: S) -> Self {
        Self::with_config(checker, ValidatorConfig::default())
    }

    pub fn with_config(checker: S, config: ValidatorConfig) -> Self {
        Self { checker, config }
    }

    #[must_use]
    pub fn checker(&self) -> &S {
        &self.checker
    }

    #[must_use]
    pub fn config(&self) -> ValidatorConfig {
        self.config
    }

    /// Check one raw submission against the session
    ///
    /// On acceptance the returned state has the normalized word at the front
    /// of its used words; on rejection it is `state` unchanged.
    pub fn submit(&self, raw: &str, state: SessionState) -> (ValidationResult, SessionState) {
        let word = normalize(raw);
        let span = tracing::debug_span!("submit", word = %word, root = %state.root());
        let _enter = span.enter();

        if let Some(kind) = self.check(&word, &state) {
            tracing::debug!(%kind, "rejected");
            let result = ValidationResult::rejected(kind, state.root());
            return (result, state);
        }

        tracing::info!(word = %word, "accepted");
        let state = state.accept(word.clone());
        (ValidationResult::Accepted(word), state)
    }

    /// Like [`submit`](Self::submit), and report visible rejections
    ///
    /// Empty input is rejected without calling `reporter`.
    pub fn submit_and_report<R: ErrorReporter + ?Sized>(
        &self,
        raw: &str,
        state: SessionState,
        reporter: &mut R,
    ) -> (ValidationResult, SessionState) {
        let (result, state) = self.submit(raw, state);

        match &result {
            ValidationResult::Rejected { kind, detail } if kind.is_reported() => {
                reporter.report_error(kind.title(), detail);
            }
            _ => {}
        }

        (result, state)
    }

    fn check(&self, word: &str, state: &SessionState) -> Option<RejectionKind> {
        if word.is_empty() {
            return Some(RejectionKind::Empty);
        }

        if !is_original(word, state.used_words()) {
            return Some(RejectionKind::AlreadyUsed);
        }

        let root = state.root().text();
        if !is_possible(word, root) {
            return Some(RejectionKind::NotSubsetOfRoot);
        }

        if !is_real(word, &self.checker) {
            return Some(RejectionKind::NotARealWord);
        }

        if self.config.reject_root_word && word == root {
            return Some(RejectionKind::SameAsRoot);
        }

        None
    }
}
