//! Word Scramble - CLI
//!
//! Spell as many words as you can from the letters of a random root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use word_scramble::{
    commands::{check_words, list_words, run_play},
    core::{RootWord, SessionState},
    dictionary::WordListDictionary,
    logging::init_logging,
    output::{print_check_result, print_words_result},
    validator::{Validator, ValidatorConfig},
    wordlists::{START_WORDS, choose_root_word, loader},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'all' (default, embedded list) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Dictionary file to use instead of the embedded English list
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<String>,

    /// Play against this root word instead of a random one
    #[arg(long, global = true)]
    root: Option<String>,

    /// Seed for the root word choice
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Reject the root word itself as an answer
    #[arg(long, global = true)]
    reject_root: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Submit words in order against one root word and show each outcome
    Check {
        /// Words to submit
        words: Vec<String>,
    },

    /// List every dictionary word that can be made from the root word
    Words,
}

/// Load root words based on the -w flag
///
/// An unreadable file is fatal: no session can start without a root word.
fn load_root_words(wordlist_mode: &str) -> Result<Vec<RootWord>> {
    match wordlist_mode {
        "all" => Ok(loader::words_from_slice(START_WORDS)),
        path => Ok(loader::load_from_file(path)?),
    }
}

fn load_dictionary(path: Option<&str>) -> Result<WordListDictionary> {
    match path {
        Some(path) => Ok(WordListDictionary::load_from_file(path, "en")?),
        None => Ok(WordListDictionary::english()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let roots = load_root_words(&cli.wordlist)?;
    let dictionary = load_dictionary(cli.dictionary.as_deref())?;
    tracing::info!(
        roots = roots.len(),
        dictionary = dictionary.len(),
        "word lists loaded"
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let root_override = cli
        .root
        .as_deref()
        .map(RootWord::new)
        .transpose()
        .context("invalid --root word")?;

    let validator = Validator::with_config(
        dictionary,
        ValidatorConfig {
            reject_root_word: cli.reject_root,
        },
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(&validator, validator.checker(), &roots, rng, root_override),
        Commands::Check { words } => {
            let root = root_override.unwrap_or_else(|| choose_root_word(&roots, &mut rng));
            let result = check_words(&validator, SessionState::new(root), words);
            print_check_result(&result);
            Ok(())
        }
        Commands::Words => {
            let root = root_override.unwrap_or_else(|| choose_root_word(&roots, &mut rng));
            let result = list_words(validator.checker(), &root);
            print_words_result(&result);
            Ok(())
        }
    }
}
