//! Validation outcomes

use crate::core::RootWord;
use std::fmt;

/// Why a candidate word was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// Nothing left after trimming; rejected silently
    Empty,
    /// Already accepted earlier in the session
    AlreadyUsed,
    /// Needs letters the root word does not have
    NotSubsetOfRoot,
    /// Not recognized by the spell checker
    NotARealWord,
    /// Identical to the root word
    SameAsRoot,
}

impl RejectionKind {
    /// Alert title shown to the player
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::AlreadyUsed => "Word used already",
            Self::NotSubsetOfRoot => "Word not possible",
            Self::NotARealWord => "Word not recognized",
            Self::SameAsRoot => "Word not allowed",
        }
    }

    /// Alert message shown to the player
    #[must_use]
    pub fn message(self, root: &RootWord) -> String {
        match self {
            Self::Empty => String::new(),
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotSubsetOfRoot => format!("You can't spell that word from '{root}'!"),
            Self::NotARealWord => "You can't just make them up, you know!".to_string(),
            Self::SameAsRoot => "That's the starting word!".to_string(),
        }
    }

    /// Whether the player gets to see this rejection
    #[must_use]
    pub fn is_reported(self) -> bool {
        !matches!(self, Self::Empty)
    }
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::AlreadyUsed => "already used",
            Self::NotSubsetOfRoot => "not possible",
            Self::NotARealWord => "not a real word",
            Self::SameAsRoot => "same as root",
        };
        write!(f, "{name}")
    }
}

/// Outcome of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted(String),
    Rejected { kind: RejectionKind, detail: String },
}

impl ValidationResult {
    pub(crate) fn rejected(kind: RejectionKind, root: &RootWord) -> Self {
        Self::Rejected {
            kind,
            detail: kind.message(root),
        }
    }

    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The rejection kind, if any
    #[must_use]
    pub fn rejection(&self) -> Option<RejectionKind> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected { kind, .. } => Some(*kind),
        }
    }
}
