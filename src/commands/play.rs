//! Interactive game loop
//!
//! Text-based prompt: type a word to submit it, or one of the commands.

use crate::core::{RootWord, SessionState};
use crate::dictionary::{SpellChecker, WordListDictionary, possible_words};
use crate::output::{TerminalReporter, print_root_word, print_used_words};
use crate::validator::{ErrorReporter, ValidationResult, Validator};
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{self, Write};

/// What a line of player input turned into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayEvent {
    Submitted(ValidationResult),
    NewGame,
    Reset,
    Hint { remaining: usize, total: usize },
    Quit,
}

/// Game state for the prompt loop
///
/// `hints` is the word list `:hint` counts against; it is usually the same
/// dictionary the validator checks with.
pub struct PlaySession<'a, S, R> {
    validator: &'a Validator<S>,
    hints: &'a WordListDictionary,
    roots: &'a [RootWord],
    rng: R,
    state: SessionState,
}

impl<'a, S: SpellChecker, R: Rng> PlaySession<'a, S, R> {
    /// Start a session with a random root word
    pub fn new(
        validator: &'a Validator<S>,
        hints: &'a WordListDictionary,
        roots: &'a [RootWord],
        mut rng: R,
    ) -> Self {
        let state = SessionState::new_session(roots, &mut rng);
        Self::with_state(validator, hints, roots, rng, state)
    }

    /// Start from an existing session
    pub fn with_state(
        validator: &'a Validator<S>,
        hints: &'a WordListDictionary,
        roots: &'a [RootWord],
        rng: R,
        state: SessionState,
    ) -> Self {
        Self {
            validator,
            hints,
            roots,
            rng,
            state,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Handle one line of input
    pub fn handle<E: ErrorReporter + ?Sized>(
        &mut self,
        line: &str,
        reporter: &mut E,
    ) -> PlayEvent {
        match line.trim().to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => PlayEvent::Quit,
            ":new" | ":n" => {
                self.state = SessionState::new_session(self.roots, &mut self.rng);
                PlayEvent::NewGame
            }
            ":reset" | ":r" => {
                self.state = self.state.reset();
                PlayEvent::Reset
            }
            ":hint" | ":h" => {
                let all = possible_words(self.hints, self.state.root());
                let total = all.len();
                let remaining = all.iter().filter(|w| !self.state.contains(w)).count();
                PlayEvent::Hint { remaining, total }
            }
            _ => {
                let (result, next) =
                    self.validator
                        .submit_and_report(line, self.state.clone(), reporter);
                self.state = next;
                PlayEvent::Submitted(result)
            }
        }
    }
}

/// Run the interactive prompt until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_play<S: SpellChecker, R: Rng>(
    validator: &Validator<S>,
    hints: &WordListDictionary,
    roots: &[RootWord],
    rng: R,
    root_override: Option<RootWord>,
) -> Result<()> {
    let mut session = match root_override {
        Some(root) => {
            PlaySession::with_state(validator, hints, roots, rng, SessionState::new(root))
        }
        None => PlaySession::new(validator, hints, roots, rng),
    };
    let mut reporter = TerminalReporter;

    println!("\nMake as many words as you can from the letters of the root word.");
    println!(
        "Commands: ':new' new word, ':reset' start over, ':hint' count words left, ':quit' exit"
    );
    print_root_word(session.state());

    loop {
        let Some(line) = get_user_input("Enter your word")? else {
            println!();
            return Ok(());
        };

        match session.handle(&line, &mut reporter) {
            PlayEvent::Quit => {
                println!("\n👋 Thanks for playing! {} words found.\n", session.state().len());
                return Ok(());
            }
            PlayEvent::NewGame => {
                println!("\n🔄 New word!");
                print_root_word(session.state());
            }
            PlayEvent::Reset => {
                println!("\n🔄 Starting over with the same word.");
                print_root_word(session.state());
            }
            PlayEvent::Hint { remaining, total } => {
                println!("\n💡 {remaining} of {total} possible words still to find.\n");
            }
            PlayEvent::Submitted(ValidationResult::Accepted(_)) => {
                print_used_words(session.state());
            }
            PlayEvent::Submitted(ValidationResult::Rejected { .. }) => {}
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    Ok((read > 0).then_some(input))
}
