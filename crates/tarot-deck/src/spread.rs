//! Spread layouts and their named positions.
//!
//! The registry is static and checked at compile time: every spread must fit
//! in the deck and list exactly `card_count` positions, indexed in order.

use serde::Serialize;

use crate::deck::DECK_SIZE;
use crate::error::{DeckError, DeckResult};

/// A named slot in a spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpreadPosition {
    /// Zero-based index within the spread.
    pub index: usize,
    /// Position name, e.g. "Past".
    pub name: &'static str,
    /// What a card in this position speaks to.
    pub description: &'static str,
}

/// A layout of one or more positions into which cards are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Spread {
    /// Stable identifier, e.g. "three_card".
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Short description shown when choosing a spread.
    pub description: &'static str,
    /// Number of cards drawn.
    pub card_count: usize,
    /// Positions in draw order. Length equals `card_count`.
    pub positions: &'static [SpreadPosition],
}

/// A single card for a quick answer or daily theme.
pub const SINGLE: Spread = Spread {
    id: "single",
    name: "Single Card Draw",
    description: "A quick answer to a specific question or a daily theme.",
    card_count: 1,
    positions: &[SpreadPosition {
        index: 0,
        name: "The Answer",
        description: "The core insight into your query.",
    }],
};

/// Past, present and future.
pub const THREE_CARD: Spread = Spread {
    id: "three_card",
    name: "Past, Present, Future",
    description: "Understand the timeline of a situation.",
    card_count: 3,
    positions: &[
        SpreadPosition {
            index: 0,
            name: "Past",
            description: "Influences from the past affecting the situation.",
        },
        SpreadPosition {
            index: 1,
            name: "Present",
            description: "The current state of affairs.",
        },
        SpreadPosition {
            index: 2,
            name: "Future",
            description: "The likely outcome if the current path is followed.",
        },
    ],
};

/// The dynamic between two people.
pub const RELATIONSHIP: Spread = Spread {
    id: "relationship",
    name: "Relationship Spread",
    description: "Explore the dynamic between two people.",
    card_count: 4,
    positions: &[
        SpreadPosition {
            index: 0,
            name: "You",
            description: "Your role and feelings in the relationship.",
        },
        SpreadPosition {
            index: 1,
            name: "Them",
            description: "Their role and feelings.",
        },
        SpreadPosition {
            index: 2,
            name: "Dynamics",
            description: "The current energy between you.",
        },
        SpreadPosition {
            index: 3,
            name: "Outcome",
            description: "Where this relationship is heading.",
        },
    ],
};

const SPREADS: &[Spread] = &[SINGLE, THREE_CARD, RELATIONSHIP];

impl Spread {
    /// Whether the spread draws at least one card and lists exactly
    /// `card_count` positions, indexed in order.
    pub const fn is_well_formed(&self) -> bool {
        if self.card_count == 0 || self.card_count != self.positions.len() {
            return false;
        }
        let mut j = 0;
        while j < self.positions.len() {
            if self.positions[j].index != j {
                return false;
            }
            j += 1;
        }
        true
    }
}

const fn registry_is_consistent(spreads: &[Spread]) -> bool {
    let mut i = 0;
    while i < spreads.len() {
        let spread = &spreads[i];
        if !spread.is_well_formed() || spread.card_count > DECK_SIZE {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    registry_is_consistent(SPREADS),
    "spread registry does not fit the deck"
);

/// All available spreads, smallest first.
pub fn spreads() -> &'static [Spread] {
    SPREADS
}

/// Look up a spread by id (case-insensitive; `-` and `_` are interchangeable).
pub fn spread_by_id(id: &str) -> DeckResult<&'static Spread> {
    let wanted = id.trim().to_lowercase().replace('-', "_");
    SPREADS
        .iter()
        .find(|s| s.id == wanted)
        .ok_or_else(|| DeckError::UnknownSpread(id.to_string()))
}

impl std::fmt::Display for Spread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_canonical_spreads() {
        let ids: Vec<&str> = spreads().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["single", "three_card", "relationship"]);
    }

    #[test]
    fn registry_consistent() {
        assert!(registry_is_consistent(spreads()));
        for spread in spreads() {
            assert_eq!(spread.positions.len(), spread.card_count);
        }
    }

    #[test]
    fn registry_check_rejects_mismatched_count() {
        const BROKEN: Spread = Spread {
            card_count: 2,
            ..SINGLE
        };
        assert!(!registry_is_consistent(&[BROKEN]));
        assert!(!BROKEN.is_well_formed());
    }

    #[test]
    fn well_formed_requires_ordered_positions() {
        const SHUFFLED: Spread = Spread {
            positions: &[THREE_CARD.positions[1], THREE_CARD.positions[0]],
            card_count: 2,
            ..THREE_CARD
        };
        assert!(!SHUFFLED.is_well_formed());

        const EMPTY: Spread = Spread {
            card_count: 0,
            positions: &[],
            ..SINGLE
        };
        assert!(!EMPTY.is_well_formed());

        assert!(spreads().iter().all(Spread::is_well_formed));
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(spread_by_id("three_card").unwrap().card_count, 3);
        assert_eq!(spread_by_id("Three-Card").unwrap().id, "three_card");
        assert_eq!(spread_by_id("relationship").unwrap().positions[3].name, "Outcome");
        assert!(matches!(
            spread_by_id("celtic_cross"),
            Err(DeckError::UnknownSpread(id)) if id == "celtic_cross"
        ));
    }

    #[test]
    fn position_names() {
        let names: Vec<&str> = THREE_CARD.positions.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Past", "Present", "Future"]);
    }
}
