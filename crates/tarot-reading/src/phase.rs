//! Reading phases.

use tarot_oracle::OracleError;

/// Where a reading stands.
///
/// `Welcome → Input → Shuffling → Revealing → Interpreting`, with reset
/// returning to `Welcome` from anywhere.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    /// Nothing has started.
    #[default]
    Welcome,
    /// Waiting for a question and a spread.
    Input,
    /// The deck is being shuffled; cards are not drawn yet.
    Shuffling,
    /// Cards are drawn and being turned over one at a time.
    Revealing,
    /// Every card is revealed and the interpretation has been requested.
    Interpreting(InterpretationStatus),
}

/// Progress of the interpretation request.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpretationStatus {
    /// A request is in flight.
    Awaiting,
    /// The interpretation arrived.
    Complete(String),
    /// The request failed; it can be retried without redrawing.
    Failed(OracleError),
}

impl Phase {
    /// Short lowercase name used in messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Input => "input",
            Self::Shuffling => "shuffling",
            Self::Revealing => "revealing",
            Self::Interpreting(InterpretationStatus::Awaiting) => "awaiting interpretation",
            Self::Interpreting(InterpretationStatus::Complete(_)) => "complete",
            Self::Interpreting(InterpretationStatus::Failed(_)) => "failed",
        }
    }

    /// Whether an interpretation request is in flight.
    pub fn is_awaiting(&self) -> bool {
        matches!(self, Self::Interpreting(InterpretationStatus::Awaiting))
    }

    /// Whether the last interpretation request failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Interpreting(InterpretationStatus::Failed(_)))
    }

    /// Whether the reading has its interpretation.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Interpreting(InterpretationStatus::Complete(_)))
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
