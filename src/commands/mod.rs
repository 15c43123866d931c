//! Command implementations

pub mod check;
pub mod play;
pub mod words;

pub use check::{CheckEntry, CheckResult, check_words};
pub use play::{PlayEvent, PlaySession, run_play};
pub use words::{WordsResult, list_words};
