//! Error types for the deck engine.

/// Errors that can occur while looking up or drawing cards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    /// A spread asks for more cards than the deck holds.
    #[error("spread '{spread}' needs {needed} cards but the deck only has {available}")]
    SpreadExceedsDeck {
        /// Spread identifier.
        spread: String,
        /// Cards the spread needs.
        needed: usize,
        /// Cards available in the deck.
        available: usize,
    },

    /// A spread's position list does not match its card count.
    #[error("spread '{spread}' lists {positions} positions for {card_count} cards")]
    MalformedSpread {
        /// Spread identifier.
        spread: String,
        /// Cards the spread claims to draw.
        card_count: usize,
        /// Positions actually listed.
        positions: usize,
    },

    /// No spread with the given identifier exists.
    #[error("unknown spread: {0}")]
    UnknownSpread(String),

    /// A suit name could not be parsed.
    #[error("unknown suit: {0}")]
    UnknownSuit(String),

    /// An arcana name could not be parsed.
    #[error("unknown arcana: {0}")]
    UnknownArcana(String),
}

/// Convenience result type for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;
