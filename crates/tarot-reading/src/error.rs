//! Error types for reading sessions.

use thiserror::Error;

/// Result type for session operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors that can occur while driving a reading session.
///
/// A session that returns an error is left exactly as it was before the
/// intent was applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReadingError {
    /// A spread was chosen before a question was entered.
    #[error("please meditate on your question first")]
    BlankQuestion,

    /// The intent is not valid in the current phase.
    #[error("cannot {intent} while {phase}")]
    InvalidTransition {
        /// What was attempted.
        intent: &'static str,
        /// The phase the session was in.
        phase: &'static str,
    },

    /// A reveal named a card outside the spread.
    #[error("no card at position {index}; the spread has {count} cards")]
    RevealOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of drawn cards.
        count: usize,
    },

    /// Deck engine error.
    #[error("{0}")]
    Deck(#[from] tarot_deck::DeckError),

    /// Interpretation request error.
    #[error("{0}")]
    Oracle(#[from] tarot_oracle::OracleError),
}

