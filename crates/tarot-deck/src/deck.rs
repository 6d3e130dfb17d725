//! The canonical 78-card deck.
//!
//! Cards are built once on first access and shared for the life of the
//! process. The order returned by [`full_deck`] is the canonical pre-shuffle
//! order: the 22 major arcana, then each suit Ace through King.

use std::sync::LazyLock;

use crate::card::{Arcana, Card, Rank, Suit};

/// Number of cards in a full tarot deck.
pub const DECK_SIZE: usize = 78;

/// Major arcana names in trump order, The Fool (0) to The World (XXI).
pub const MAJOR_ARCANA: [&str; 22] = [
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

const MAJOR_KEYWORDS: [&str; 3] = ["Archetype", "Major Life Event", "Spiritual Lesson"];
const MAJOR_IMAGE_OFFSET: u32 = 101;
const MINOR_IMAGE_OFFSET: u32 = 201;

static FULL_DECK: LazyLock<Vec<Card>> = LazyLock::new(build_deck);

/// The full deck in canonical order.
pub fn full_deck() -> &'static [Card] {
    &FULL_DECK
}

/// Look up a card by its stable id (1-78).
pub fn card_by_id(id: u8) -> Option<&'static Card> {
    let index = usize::from(id).checked_sub(1)?;
    FULL_DECK.get(index)
}

/// Cards matching an optional suit and arcana filter, in canonical order.
pub fn filter(suit: Option<Suit>, arcana: Option<Arcana>) -> Vec<&'static Card> {
    FULL_DECK
        .iter()
        .filter(|c| suit.is_none_or(|s| c.suit == Some(s)))
        .filter(|c| arcana.is_none_or(|a| c.arcana == a))
        .collect()
}

fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    let mut next_id: u8 = 1;

    for name in MAJOR_ARCANA {
        deck.push(Card {
            id: next_id,
            name: name.to_string(),
            suit: None,
            arcana: Arcana::Major,
            image_seed: u32::from(next_id) + MAJOR_IMAGE_OFFSET,
            keywords: MAJOR_KEYWORDS.to_vec(),
        });
        next_id += 1;
    }

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card {
                id: next_id,
                name: format!("{rank} of {suit}"),
                suit: Some(suit),
                arcana: Arcana::Minor,
                image_seed: u32::from(next_id) + MINOR_IMAGE_OFFSET,
                keywords: vec![suit_keyword(suit), "Daily Life", "Action"],
            });
            next_id += 1;
        }
    }

    deck
}

fn suit_keyword(suit: Suit) -> &'static str {
    match suit {
        Suit::Wands => "Wands",
        Suit::Cups => "Cups",
        Suit::Swords => "Swords",
        Suit::Pentacles => "Pentacles",
    }
}
