use std::io::{self, BufRead, Write};
use std::time::Duration;

use colored::Colorize;
use tokio::runtime::Runtime;

use tarot_deck::spread_by_id;
use tarot_oracle::{GeminiInterpreter, OracleConfig};
use tarot_reading::{
    Effect, Intent, InterpretationStatus, Phase, ReadingConfig, ReadingError, ReadingSession,
};

/// Settings for an interactive reading.
pub struct ReadOptions {
    /// RNG seed for reproducible draws.
    pub seed: Option<u64>,
    /// Probability that each card is drawn reversed.
    pub reversal_chance: f64,
    /// How long the shuffle lingers before the cards are dealt.
    pub shuffle_delay: Duration,
    /// Pause after the last reveal before the oracle is consulted.
    pub reveal_pause: Duration,
    /// Model override for the interpreter.
    pub model: Option<String>,
}

const HELP: &str = "\
  start             Begin a reading
  ask <question>    Set the question to meditate on
  spread <id>       Choose a spread and shuffle (see 'spreads')
  reveal <n>        Turn over card n
  retry             Ask the oracle again after a failure
  reset             Abandon the reading and start over
  status            Show where the reading stands
  cards             Show the cards on the table
  spreads           List the spreads
  quit              Leave";

/// An interactive reading: the session plus what drives its effects.
struct Table {
    session: ReadingSession,
    interpreter: GeminiInterpreter,
    runtime: Runtime,
    options: ReadOptions,
}

pub fn run(options: ReadOptions) -> Result<(), String> {
    let mut reading = ReadingConfig::default().with_reversal_chance(options.reversal_chance);
    if let Some(seed) = options.seed {
        reading = reading.with_seed(seed);
    }

    let mut oracle = OracleConfig::from_env();
    if let Some(model) = &options.model {
        oracle = oracle.with_model(model.clone());
    }
    if oracle.api_key.is_none() {
        tracing::warn!("no API key set; interpretations will be unavailable");
    }
    let interpreter = GeminiInterpreter::new(oracle).map_err(|e| e.to_string())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start runtime: {e}"))?;

    let mut table = Table {
        session: ReadingSession::new(reading),
        interpreter,
        runtime,
        options,
    };

    println!("  {}", "The Mystic Tarot".bold());
    println!("  Seek guidance from the cards. Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        if command.eq_ignore_ascii_case("quit") || command.eq_ignore_ascii_case("q") {
            println!("May the cards guide you.");
            break;
        }

        if let Err(e) = table.command(&command.to_lowercase(), rest) {
            println!("{}\n", e.yellow());
        }
    }

    Ok(())
}

impl Table {
    fn command(&mut self, command: &str, rest: &str) -> Result<(), String> {
        match command {
            "help" | "h" | "?" => println!("{HELP}\n"),
            "status" => println!("{}\n", indent(&self.session.state().summary())),
            "spreads" => {
                super::print_spreads();
                println!();
            }
            "cards" => {
                if self.session.state().drawn().is_empty() {
                    println!("  No cards on the table.\n");
                } else {
                    self.print_cards();
                }
            }
            "start" => {
                self.step(Intent::Start).map_err(|e| e.to_string())?;
                println!("  What question weighs on your mind? Use 'ask <question>'.\n");
            }
            "ask" => {
                if self.session.phase() == &Phase::Welcome {
                    self.step(Intent::Start).map_err(|e| e.to_string())?;
                }
                self.step(Intent::SetQuestion(rest.to_string()))
                    .map_err(|e| e.to_string())?;
                println!("  Now choose a spread with 'spread <id>'.\n");
            }
            "spread" => {
                if rest.is_empty() {
                    return Err("usage: spread <id>".into());
                }
                let spread = spread_by_id(rest).map_err(|e| e.to_string())?;
                self.step(Intent::ChooseSpread(spread))
                    .map_err(|e| e.to_string())?;
            }
            "reveal" => {
                let number: usize = rest
                    .parse()
                    .map_err(|_| format!("usage: reveal <n>, got '{rest}'"))?;
                if number == 0 {
                    return Err("cards are numbered from 1".into());
                }
                match self.step(Intent::Reveal(number - 1)) {
                    Err(ReadingError::RevealOutOfRange { count, .. }) => {
                        return Err(format!(
                            "no card at position {number}; the spread has {count} cards"
                        ));
                    }
                    other => other.map_err(|e| e.to_string())?,
                }
            }
            "retry" => self.step(Intent::Retry).map_err(|e| e.to_string())?,
            "reset" | "new" => {
                self.step(Intent::Reset).map_err(|e| e.to_string())?;
                println!("  The cards return to the deck. Type 'start' to begin again.\n");
            }
            other => return Err(format!("unknown command '{other}'; type 'help'")),
        }
        Ok(())
    }

    /// Apply an intent, carry out any effects it leads to, then show the table.
    fn step(&mut self, intent: Intent) -> Result<(), ReadingError> {
        let renders = matches!(
            intent,
            Intent::ChooseSpread(_) | Intent::Reveal(_) | Intent::Retry
        );
        let mut effect = self.session.apply(intent)?;

        while let Some(next) = effect.take() {
            effect = match next {
                Effect::Shuffle => {
                    println!("  {}", "Shuffling the deck...".dimmed());
                    self.pause(self.options.shuffle_delay);
                    self.session.apply(Intent::ShuffleComplete)?
                }
                Effect::Dispatch(ticket) => {
                    self.print_cards();
                    self.pause(self.options.reveal_pause);
                    println!("  {}", "Consulting the oracle...".dimmed());
                    let reply = self.runtime.block_on(ticket.send(&self.interpreter));
                    self.session.apply(reply)?
                }
            };
        }

        if renders {
            self.render();
        }
        Ok(())
    }

    /// Wait out a pacing delay on the reading's runtime.
    fn pause(&self, delay: Duration) {
        // The timer must be created inside the runtime.
        self.runtime
            .block_on(async { tokio::time::sleep(delay).await });
    }

    fn render(&self) {
        match self.session.phase() {
            Phase::Revealing => {
                self.print_cards();
                println!("  Turn the cards over with 'reveal <n>'.\n");
            }
            Phase::Interpreting(InterpretationStatus::Complete(text)) => {
                println!("\n  {}\n", "The Oracle Speaks".bold());
                println!("{text}\n");
                println!("  Type 'reset' for a new reading.\n");
            }
            Phase::Interpreting(InterpretationStatus::Failed(err)) => {
                println!(
                    "  {} {}",
                    "The cosmic connection was interrupted:".red(),
                    err
                );
                println!("  Type 'retry' to ask again or 'reset' to start over.\n");
            }
            _ => {}
        }
    }

    fn print_cards(&self) {
        let state = self.session.state();
        if let Some(spread) = state.spread() {
            println!("  {} for \"{}\"", spread.name.bold(), state.question());
        }
        println!("{}\n", super::drawn_table(state.drawn(), |i| state.is_revealed(i)));
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|l| format!("  {l}"))
        .collect::<Vec<_>>()
        .join("\n")
}
