//! Drawing cards from a shuffled deck into a spread.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::card::Card;
use crate::error::{DeckError, DeckResult};
use crate::spread::{Spread, SpreadPosition};

/// Default probability that a drawn card lands reversed.
pub const REVERSAL_CHANCE: f64 = 0.2;

/// Which way up a drawn card lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    /// Read with its ordinary meaning.
    Upright,
    /// Read with its blocked or inverted meaning.
    Reversed,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upright => write!(f, "Upright"),
            Self::Reversed => write!(f, "Reversed"),
        }
    }
}

/// A card placed in a spread position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawnCard {
    /// The card drawn.
    pub card: Card,
    /// The position it occupies.
    pub position: SpreadPosition,
    /// Whether the card came up reversed.
    pub is_reversed: bool,
}

impl DrawnCard {
    /// The card's orientation.
    pub fn orientation(&self) -> Orientation {
        if self.is_reversed {
            Orientation::Reversed
        } else {
            Orientation::Upright
        }
    }
}

impl std::fmt::Display for DrawnCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.position.name,
            self.card.name,
            self.orientation()
        )
    }
}

/// Draw a spread from a shuffled deck with the default reversal chance.
pub fn draw<R: Rng + ?Sized>(
    shuffled: &[Card],
    spread: &Spread,
    rng: &mut R,
) -> DeckResult<Vec<DrawnCard>> {
    draw_with_reversal(shuffled, spread, REVERSAL_CHANCE, rng)
}

/// Draw a spread from a shuffled deck.
///
/// Takes the first `spread.card_count` cards in deck order and pairs each
/// with the position at the same index. Every card is reversed
/// independently with probability `reversal_chance` (clamped to `0..=1`).
/// Fails if the spread is malformed or needs more cards than `shuffled` has.
pub fn draw_with_reversal<R: Rng + ?Sized>(
    shuffled: &[Card],
    spread: &Spread,
    reversal_chance: f64,
    rng: &mut R,
) -> DeckResult<Vec<DrawnCard>> {
    if !spread.is_well_formed() {
        return Err(DeckError::MalformedSpread {
            spread: spread.id.to_string(),
            card_count: spread.card_count,
            positions: spread.positions.len(),
        });
    }
    if spread.card_count > shuffled.len() {
        return Err(DeckError::SpreadExceedsDeck {
            spread: spread.id.to_string(),
            needed: spread.card_count,
            available: shuffled.len(),
        });
    }

    let chance = clamp_probability(reversal_chance);
    let drawn: Vec<DrawnCard> = shuffled
        .iter()
        .zip(spread.positions.iter())
        .map(|(card, position)| DrawnCard {
            card: card.clone(),
            position: *position,
            is_reversed: rng.random_bool(chance),
        })
        .collect();

    debug!(
        spread = spread.id,
        cards = drawn.len(),
        reversed = drawn.iter().filter(|d| d.is_reversed).count(),
        "drew spread"
    );
    Ok(drawn)
}

/// Clamp a probability into `0..=1`, treating NaN as zero.
pub fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::full_deck;
    use crate::shuffle::shuffle;
    use crate::spread::{RELATIONSHIP, SINGLE, THREE_CARD};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn draws_card_count_entries_in_position_order() {
        let mut rng = StdRng::seed_from_u64(42);
        for spread in [SINGLE, THREE_CARD, RELATIONSHIP] {
            let shuffled = shuffle(full_deck(), &mut rng);
            let drawn = draw(&shuffled, &spread, &mut rng).unwrap();
            assert_eq!(drawn.len(), spread.card_count);
            for (i, entry) in drawn.iter().enumerate() {
                assert_eq!(entry.position, spread.positions[i]);
                assert_eq!(entry.card, shuffled[i]);
            }
        }
    }

    #[test]
    fn reversal_rate_near_twenty_percent() {
        let mut rng = StdRng::seed_from_u64(12345);
        let deck = full_deck();
        let trials = 10_000;
        let reversed = (0..trials)
            .filter(|_| draw(deck, &SINGLE, &mut rng).unwrap()[0].is_reversed)
            .count();
        let rate = reversed as f64 / trials as f64;
        assert!((0.18..=0.22).contains(&rate), "reversal rate {rate}");
    }

    #[test]
    fn reversal_chance_extremes() {
        let mut rng = StdRng::seed_from_u64(3);
        let never = draw_with_reversal(full_deck(), &RELATIONSHIP, 0.0, &mut rng).unwrap();
        assert!(never.iter().all(|d| !d.is_reversed));

        let always = draw_with_reversal(full_deck(), &RELATIONSHIP, 1.0, &mut rng).unwrap();
        assert!(always.iter().all(|d| d.is_reversed));

        let clamped = draw_with_reversal(full_deck(), &RELATIONSHIP, 7.5, &mut rng).unwrap();
        assert!(clamped.iter().all(|d| d.is_reversed));
    }

    #[test]
    fn spread_larger_than_deck_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        let tiny = &full_deck()[..2];
        let err = draw(tiny, &THREE_CARD, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            DeckError::SpreadExceedsDeck {
                needed: 3,
                available: 2,
                ..
            }
        ));
    }

    #[test]
    fn malformed_spread_fails_instead_of_short_draw() {
        const SHORT: Spread = Spread {
            id: "short",
            card_count: 3,
            positions: &[THREE_CARD.positions[0], THREE_CARD.positions[1]],
            ..THREE_CARD
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            draw(full_deck(), &SHORT, &mut rng).unwrap_err(),
            DeckError::MalformedSpread {
                spread: "short".into(),
                card_count: 3,
                positions: 2,
            }
        );
    }

    #[test]
    fn clamp_probability_handles_nan() {
        assert_eq!(clamp_probability(f64::NAN), 0.0);
        assert_eq!(clamp_probability(-1.0), 0.0);
        assert_eq!(clamp_probability(0.2), 0.2);
    }

    #[test]
    fn display_and_orientation() {
        let drawn = DrawnCard {
            card: full_deck()[16].clone(),
            position: THREE_CARD.positions[2],
            is_reversed: true,
        };
        assert_eq!(drawn.orientation(), Orientation::Reversed);
        assert_eq!(drawn.to_string(), "Future: The Tower (Reversed)");
    }
}
