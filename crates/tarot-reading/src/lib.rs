//! Tarot reading sessions.
//!
//! A [`ReadingSession`] owns one reading from question to interpretation. The
//! front end feeds it [`Intent`]s and carries out the [`Effect`]s it returns:
//! pacing the shuffle, and sending interpretation requests to an
//! [`Interpreter`](tarot_oracle::Interpreter). Responses come back as intents
//! tagged with the session generation, so a reset discards late answers.

pub mod config;
pub mod error;
pub mod intent;
pub mod phase;
pub mod session;
pub mod state;

pub use config::ReadingConfig;
pub use error::{ReadingError, ReadingResult};
pub use intent::{DispatchTicket, Effect, Intent};
pub use phase::{InterpretationStatus, Phase};
pub use session::ReadingSession;
pub use state::ReadingState;
