//! Tarot deck primitives.
//!
//! Provides the static 78-card deck and spread registry, a Fisher-Yates
//! shuffle over any injected random generator, and the draw step that lays
//! shuffled cards into spread positions with independent reversals.

pub mod card;
pub mod deck;
pub mod draw;
pub mod error;
pub mod shuffle;
pub mod spread;

pub use card::{Arcana, Card, Rank, Suit};
pub use deck::{DECK_SIZE, card_by_id, full_deck};
pub use draw::{DrawnCard, Orientation, REVERSAL_CHANCE, draw, draw_with_reversal};
pub use error::{DeckError, DeckResult};
pub use shuffle::shuffle;
pub use spread::{Spread, SpreadPosition, spread_by_id, spreads};
