//! The observable state of a reading.

use tarot_deck::{DrawnCard, Spread};
use tarot_oracle::InterpretationRequest;

use crate::phase::{InterpretationStatus, Phase};

/// Everything a front end renders for one reading.
///
/// Once cards are drawn, `drawn` and `revealed` both hold exactly
/// `spread.card_count` entries, index-aligned with the spread positions.
/// `Default` is the state of a fresh session and of one just reset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReadingState {
    pub(crate) phase: Phase,
    pub(crate) question: String,
    pub(crate) spread: Option<&'static Spread>,
    pub(crate) drawn: Vec<DrawnCard>,
    pub(crate) revealed: Vec<bool>,
    pub(crate) request: Option<InterpretationRequest>,
}

impl ReadingState {
    /// Current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The question as entered.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The chosen spread, once one is chosen.
    pub fn spread(&self) -> Option<&'static Spread> {
        self.spread
    }

    /// Drawn cards in spread position order; empty until the shuffle ends.
    pub fn drawn(&self) -> &[DrawnCard] {
        &self.drawn
    }

    /// Reveal flags, index-aligned with [`drawn`](Self::drawn).
    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    /// Whether the card at `index` is face up.
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Number of cards turned over so far.
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Whether cards are drawn and every one is face up.
    pub fn all_revealed(&self) -> bool {
        !self.revealed.is_empty() && self.revealed.iter().all(|r| *r)
    }

    /// The request built when the last card was revealed.
    pub fn request(&self) -> Option<&InterpretationRequest> {
        self.request.as_ref()
    }

    /// The interpretation text, or `""` if none has arrived.
    pub fn interpretation(&self) -> &str {
        match &self.phase {
            Phase::Interpreting(InterpretationStatus::Complete(text)) => text,
            _ => "",
        }
    }

    /// A short multi-line summary of the reading.
    pub fn summary(&self) -> String {
        let mut out = format!("Phase: {}\n", self.phase);

        if self.question.trim().is_empty() {
            out.push_str("Question: (none)\n");
        } else {
            out.push_str(&format!("Question: {}\n", self.question));
        }

        match self.spread {
            Some(spread) => out.push_str(&format!(
                "Spread: {} ({} cards)\n",
                spread.name, spread.card_count
            )),
            None => out.push_str("Spread: (not chosen)\n"),
        }

        out.push_str(&format!(
            "Revealed: {}/{}",
            self.revealed_count(),
            self.revealed.len()
        ));
        out
    }
}
