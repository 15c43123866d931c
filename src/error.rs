//! Startup errors
//!
//! Only loading the word lists can fail. Rejected player input is a
//! [`ValidationResult`](crate::validator::ValidationResult), not an error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read a word list resource at startup
#[derive(Debug, Error)]
pub enum LoadError {
    /// The root word list could not be read; no session can start.
    #[error("could not load root word list from {}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dictionary file could not be read.
    #[error("could not load dictionary from {}", path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
