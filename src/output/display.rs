//! Display functions for game state and command results

use super::formatters::{letter_count_badge, spaced_letters};
use crate::commands::{CheckResult, WordsResult};
use crate::core::SessionState;
use crate::validator::{ErrorReporter, ValidationResult};
use colored::Colorize;

/// Reports rejections as an alert block on stdout
#[derive(Debug, Default)]
pub struct TerminalReporter;

impl ErrorReporter for TerminalReporter {
    fn report_error(&mut self, title: &str, message: &str) {
        println!("\n┌{}", "─".repeat(58));
        println!("│ {}", title.bright_red().bold());
        println!("│ {message}");
        println!("└{}\n", "─".repeat(58));
    }
}

/// Print the session header with the root word
pub fn print_root_word(state: &SessionState) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        "  Root word: {}",
        spaced_letters(state.root().text()).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
}

/// Print the used words, most recent first
pub fn print_used_words(state: &SessionState) {
    if state.is_empty() {
        return;
    }

    println!();
    for word in state.used_words() {
        println!(
            "  {} {}",
            letter_count_badge(word).bright_cyan(),
            word.bright_white()
        );
    }
    println!();
}

/// Print the outcome of a `check` run, one line per submission
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.root.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for entry in &result.entries {
        match &entry.result {
            ValidationResult::Accepted(word) => {
                println!("  {} {}", "✓".green().bold(), word.bright_white());
            }
            ValidationResult::Rejected { kind, detail } => {
                let shown = if entry.input.trim().is_empty() {
                    "(empty)".bright_black().to_string()
                } else {
                    entry.input.trim().to_string()
                };
                if kind.is_reported() {
                    println!(
                        "  {} {} {} {}",
                        "✗".red().bold(),
                        shown,
                        kind.title().red(),
                        detail.bright_black()
                    );
                } else {
                    println!("  {} {}", "·".bright_black(), shown);
                }
            }
        }
    }

    println!(
        "\n{}",
        format!(
            "{} of {} accepted",
            result.accepted_count(),
            result.entries.len()
        )
        .bold()
    );
}

/// Print every word that can be made from the root
pub fn print_words_result(result: &WordsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORDS FROM".bright_cyan().bold(),
        result.root.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let mut current_len = 0;
    for word in &result.words {
        let len = word.chars().count();
        if len != current_len {
            current_len = len;
            println!("\n{}", format!("{len} letters:").bright_cyan());
        }
        println!("  {word}");
    }

    println!("\n📊 {} words found", result.words.len());
}
