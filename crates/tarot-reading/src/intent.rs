//! What the front end sends in, and what the session asks it to do.

use tarot_deck::Spread;
use tarot_oracle::{InterpretationRequest, Interpreter, OracleResult};
use tracing::debug;

/// A user action or collaborator reply fed into the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Leave the welcome screen.
    Start,
    /// Replace the question text.
    SetQuestion(String),
    /// Choose a spread; requires a non-blank question.
    ChooseSpread(&'static Spread),
    /// The shuffle pacing has elapsed; draw the cards.
    ShuffleComplete,
    /// Turn over the card at this index.
    Reveal(usize),
    /// Resend a failed interpretation request.
    Retry,
    /// Abandon the reading and start over.
    Reset,
    /// The collaborator answered a dispatched request.
    InterpretationReceived {
        /// Generation the request was dispatched under.
        generation: u64,
        /// Text or failure.
        outcome: OracleResult<String>,
    },
}

impl Intent {
    /// Short name used in messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::SetQuestion(_) => "set the question",
            Self::ChooseSpread(_) => "choose a spread",
            Self::ShuffleComplete => "finish shuffling",
            Self::Reveal(_) => "reveal a card",
            Self::Retry => "retry the interpretation",
            Self::Reset => "reset",
            Self::InterpretationReceived { .. } => "receive an interpretation",
        }
    }
}

/// Work the front end must carry out after an intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Show the shuffle, then send [`Intent::ShuffleComplete`]. Any delay,
    /// including none, is fine.
    Shuffle,
    /// Send this request to the interpreter and feed the reply back.
    Dispatch(DispatchTicket),
}

/// An interpretation request tagged with the session generation it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchTicket {
    /// Session generation at dispatch time.
    pub generation: u64,
    /// The request to send.
    pub request: InterpretationRequest,
}

impl DispatchTicket {
    /// Send the request and wrap the reply as an intent for the session.
    pub async fn send(self, interpreter: &dyn Interpreter) -> Intent {
        debug!(
            interpreter = interpreter.name(),
            generation = self.generation,
            "dispatching interpretation"
        );
        let outcome = interpreter.interpret(&self.request).await;
        Intent::InterpretationReceived {
            generation: self.generation,
            outcome,
        }
    }
}
