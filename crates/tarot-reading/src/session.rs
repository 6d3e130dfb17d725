//! Reading session state machine.
//!
//! `ReadingSession` applies one [`Intent`] at a time to its [`ReadingState`]
//! and returns at most one [`Effect`] for the front end to carry out. Pacing
//! (shuffle animation, the pause after the last reveal) belongs to the front
//! end; the machine is correct with any delay, including none.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use tarot_deck::{DeckError, Spread, draw_with_reversal, full_deck, shuffle};
use tarot_oracle::{OracleError, OracleResult, build_request};

use crate::config::ReadingConfig;
use crate::error::{ReadingError, ReadingResult};
use crate::intent::{DispatchTicket, Effect, Intent};
use crate::phase::{InterpretationStatus, Phase};
use crate::state::ReadingState;

/// One tarot reading, from question to interpretation.
pub struct ReadingSession<R: Rng = StdRng> {
    state: ReadingState,
    generation: u64,
    reversal_chance: f64,
    rng: R,
}

impl ReadingSession {
    /// Create a session whose generator comes from the configuration.
    pub fn new(config: ReadingConfig) -> Self {
        let rng = config.rng();
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> ReadingSession<R> {
    /// Create a session drawing from the given generator.
    pub fn with_rng(config: ReadingConfig, rng: R) -> Self {
        Self {
            state: ReadingState::default(),
            generation: 0,
            reversal_chance: config.reversal_chance,
            rng,
        }
    }

    /// The observable reading state.
    pub fn state(&self) -> &ReadingState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> &Phase {
        &self.state.phase
    }

    /// Generation counter; bumped by every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply an intent.
    ///
    /// On error the state is unchanged. Reveals outside the revealing phase,
    /// repeat reveals, and replies for a superseded generation are ignored
    /// and return `Ok(None)`.
    pub fn apply(&mut self, intent: Intent) -> ReadingResult<Option<Effect>> {
        let name = intent.name();
        match intent {
            Intent::Start => self.start(name),
            Intent::SetQuestion(text) => self.set_question(name, text),
            Intent::ChooseSpread(spread) => self.choose_spread(name, spread),
            Intent::ShuffleComplete => self.finish_shuffle(name),
            Intent::Reveal(index) => self.reveal(name, index),
            Intent::Retry => self.retry(name),
            Intent::Reset => {
                self.reset();
                Ok(None)
            }
            Intent::InterpretationReceived {
                generation,
                outcome,
            } => {
                self.receive(generation, outcome);
                Ok(None)
            }
        }
    }

    fn start(&mut self, name: &'static str) -> ReadingResult<Option<Effect>> {
        self.expect_phase(&Phase::Welcome, name)?;
        self.state.phase = Phase::Input;
        Ok(None)
    }

    fn set_question(
        &mut self,
        name: &'static str,
        text: String,
    ) -> ReadingResult<Option<Effect>> {
        self.expect_phase(&Phase::Input, name)?;
        self.state.question = text;
        Ok(None)
    }

    fn choose_spread(
        &mut self,
        name: &'static str,
        spread: &'static Spread,
    ) -> ReadingResult<Option<Effect>> {
        self.expect_phase(&Phase::Input, name)?;

        let question = self.state.question.trim();
        if question.is_empty() {
            return Err(ReadingError::BlankQuestion);
        }
        if !spread.is_well_formed() {
            return Err(DeckError::MalformedSpread {
                spread: spread.id.to_string(),
                card_count: spread.card_count,
                positions: spread.positions.len(),
            }
            .into());
        }

        self.state.question = question.to_string();
        self.state.spread = Some(spread);
        self.state.phase = Phase::Shuffling;
        info!(spread = spread.id, "question captured, shuffling");
        Ok(Some(Effect::Shuffle))
    }

    fn finish_shuffle(&mut self, name: &'static str) -> ReadingResult<Option<Effect>> {
        self.expect_phase(&Phase::Shuffling, name)?;
        let spread = self.state.spread.ok_or(ReadingError::InvalidTransition {
            intent: name,
            phase: "shuffling without a spread",
        })?;

        let shuffled = shuffle(full_deck(), &mut self.rng);
        let drawn = draw_with_reversal(&shuffled, spread, self.reversal_chance, &mut self.rng)?;

        self.state.revealed = vec![false; drawn.len()];
        self.state.drawn = drawn;
        self.state.phase = Phase::Revealing;
        debug!(cards = self.state.drawn.len(), "cards dealt face down");
        Ok(None)
    }

    fn reveal(&mut self, name: &'static str, index: usize) -> ReadingResult<Option<Effect>> {
        if self.state.phase != Phase::Revealing {
            debug!(index, phase = %self.state.phase, "reveal ignored outside revealing phase");
            return Ok(None);
        }

        let count = self.state.revealed.len();
        if index >= count {
            return Err(ReadingError::RevealOutOfRange { index, count });
        }
        if self.state.revealed[index] {
            debug!(index, "card already revealed");
            return Ok(None);
        }

        let completes = self
            .state
            .revealed
            .iter()
            .enumerate()
            .all(|(i, up)| *up || i == index);

        if !completes {
            self.state.revealed[index] = true;
            debug!(index, "card revealed");
            return Ok(None);
        }

        // Build before flipping so a failure leaves the flags untouched.
        let spread = self.state.spread.ok_or(ReadingError::InvalidTransition {
            intent: name,
            phase: "revealing without a spread",
        })?;
        let request = build_request(&self.state.question, spread, &self.state.drawn)?;

        self.state.revealed[index] = true;
        self.state.request = Some(request.clone());
        self.state.phase = Phase::Interpreting(InterpretationStatus::Awaiting);
        info!(generation = self.generation, "all cards revealed, requesting interpretation");

        Ok(Some(Effect::Dispatch(DispatchTicket {
            generation: self.generation,
            request,
        })))
    }

    fn retry(&mut self, name: &'static str) -> ReadingResult<Option<Effect>> {
        if !self.state.phase.is_failed() || !self.state.all_revealed() {
            return Err(self.invalid(name));
        }
        let request = self
            .state
            .request
            .clone()
            .ok_or_else(|| self.invalid(name))?;

        self.state.phase = Phase::Interpreting(InterpretationStatus::Awaiting);
        info!(generation = self.generation, "retrying interpretation");
        Ok(Some(Effect::Dispatch(DispatchTicket {
            generation: self.generation,
            request,
        })))
    }

    fn reset(&mut self) {
        self.state = ReadingState::default();
        self.generation += 1;
        debug!(generation = self.generation, "session reset");
    }

    fn receive(&mut self, generation: u64, outcome: OracleResult<String>) {
        if generation != self.generation {
            warn!(
                stale = generation,
                current = self.generation,
                "discarding interpretation for a superseded reading"
            );
            return;
        }
        if !self.state.phase.is_awaiting() {
            warn!(phase = %self.state.phase, "discarding unexpected interpretation");
            return;
        }

        let status = match outcome {
            Ok(text) if !text.trim().is_empty() => InterpretationStatus::Complete(text),
            Ok(_) => InterpretationStatus::Failed(OracleError::EmptyResponse),
            Err(err) => {
                warn!(error = %err, "interpretation failed");
                InterpretationStatus::Failed(err)
            }
        };
        self.state.phase = Phase::Interpreting(status);
    }

    fn expect_phase(&self, expected: &Phase, intent: &'static str) -> ReadingResult<()> {
        if &self.state.phase == expected {
            Ok(())
        } else {
            Err(self.invalid(intent))
        }
    }

    fn invalid(&self, intent: &'static str) -> ReadingError {
        ReadingError::InvalidTransition {
            intent,
            phase: self.state.phase.name(),
        }
    }
}
