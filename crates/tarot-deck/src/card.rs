//! Card identity types: suits, ranks, and arcana.

use serde::Serialize;

use crate::error::{DeckError, DeckResult};

/// One of the four minor-arcana suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Suit {
    /// Fire; drive and ambition.
    Wands,
    /// Water; feeling and relationships.
    Cups,
    /// Air; thought and conflict.
    Swords,
    /// Earth; work and material things.
    Pentacles,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Wands, Self::Cups, Self::Swords, Self::Pentacles];

    /// Parse a suit from a user-supplied string.
    pub fn parse(s: &str) -> DeckResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "wands" | "wand" => Ok(Self::Wands),
            "cups" | "cup" => Ok(Self::Cups),
            "swords" | "sword" => Ok(Self::Swords),
            "pentacles" | "pentacle" | "coins" => Ok(Self::Pentacles),
            other => Err(DeckError::UnknownSuit(other.to_string())),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wands => write!(f, "Wands"),
            Self::Cups => write!(f, "Cups"),
            Self::Swords => write!(f, "Swords"),
            Self::Pentacles => write!(f, "Pentacles"),
        }
    }
}

/// A minor-arcana rank, Ace through King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rank {
    /// Ace (one).
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Page, the first court card.
    Page,
    /// Knight.
    Knight,
    /// Queen.
    Queen,
    /// King, the highest court card.
    King,
}

impl Rank {
    /// All ranks in canonical deck order.
    pub const ALL: [Self; 14] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Page,
        Self::Knight,
        Self::Queen,
        Self::King,
    ];
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Page => "Page",
            Self::Knight => "Knight",
            Self::Queen => "Queen",
            Self::King => "King",
        };
        write!(f, "{label}")
    }
}

/// The two classes of tarot card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Arcana {
    /// The 22 trump cards.
    Major,
    /// The 56 suited cards.
    Minor,
}

impl Arcana {
    /// Parse an arcana class from a user-supplied string.
    pub fn parse(s: &str) -> DeckResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "major" | "major arcana" | "trumps" => Ok(Self::Major),
            "minor" | "minor arcana" => Ok(Self::Minor),
            other => Err(DeckError::UnknownArcana(other.to_string())),
        }
    }
}

impl std::fmt::Display for Arcana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major => write!(f, "Major Arcana"),
            Self::Minor => write!(f, "Minor Arcana"),
        }
    }
}

/// A single tarot card. Built once with the deck and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Stable identifier, 1-78 in canonical order.
    pub id: u8,
    /// Display name, e.g. "The Tower" or "Queen of Cups".
    pub name: String,
    /// Suit, or `None` for the major arcana.
    pub suit: Option<Suit>,
    /// Arcana class.
    pub arcana: Arcana,
    /// Fixed seed used by front ends to pick card artwork.
    pub image_seed: u32,
    /// Short descriptive keywords.
    pub keywords: Vec<&'static str>,
}

impl Card {
    /// Whether this card belongs to the major arcana.
    pub fn is_major(&self) -> bool {
        self.arcana == Arcana::Major
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suit_parse_variants() {
        assert_eq!(Suit::parse("cups").unwrap(), Suit::Cups);
        assert_eq!(Suit::parse(" Wands ").unwrap(), Suit::Wands);
        assert_eq!(Suit::parse("coins").unwrap(), Suit::Pentacles);
        assert!(matches!(
            Suit::parse("hearts"),
            Err(DeckError::UnknownSuit(s)) if s == "hearts"
        ));
    }

    #[test]
    fn arcana_parse_variants() {
        assert_eq!(Arcana::parse("MAJOR").unwrap(), Arcana::Major);
        assert_eq!(Arcana::parse("minor arcana").unwrap(), Arcana::Minor);
        assert!(Arcana::parse("middle").is_err());
    }

    #[test]
    fn display_labels() {
        assert_eq!(Arcana::Major.to_string(), "Major Arcana");
        assert_eq!(Suit::Pentacles.to_string(), "Pentacles");
        assert_eq!(Rank::Knight.to_string(), "Knight");
    }

    #[test]
    fn rank_order() {
        assert_eq!(Rank::ALL.len(), 14);
        assert_eq!(Rank::ALL[0], Rank::Ace);
        assert_eq!(Rank::ALL[13], Rank::King);
    }
}
