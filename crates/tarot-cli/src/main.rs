//! Command-line front end for tarot readings.

mod commands;

use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tarot_deck::REVERSAL_CHANCE;

#[derive(Parser)]
#[command(
    name = "tarot",
    about = "Tarot readings in the terminal, interpreted by a language model",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the cards of the deck
    Deck {
        /// Only cards of this suit (wands, cups, swords, pentacles)
        #[arg(short, long)]
        suit: Option<String>,

        /// Only cards of this arcana (major, minor)
        #[arg(short, long)]
        arcana: Option<String>,
    },

    /// List the available spreads and their positions
    Spreads,

    /// Shuffle and lay out a spread without an interpretation
    Draw {
        /// Spread id (single, three_card, relationship)
        spread: String,

        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Question to include in the interpretation prompt
        #[arg(short, long)]
        question: Option<String>,

        /// Print the drawn cards as JSON
        #[arg(long)]
        json: bool,

        /// Also print the interpretation prompt that would be sent
        #[arg(long, requires = "question")]
        prompt: bool,
    },

    /// Start an interactive reading
    Read {
        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,

        /// Probability that each card is drawn reversed
        #[arg(long, default_value_t = REVERSAL_CHANCE)]
        reversal_chance: f64,

        /// Milliseconds to linger on the shuffle
        #[arg(long, default_value = "2000")]
        shuffle_delay_ms: u64,

        /// Milliseconds to pause after the last card before consulting the oracle
        #[arg(long, default_value = "800")]
        reveal_pause_ms: u64,

        /// Model to ask for the interpretation (default: gemini-2.5-flash)
        #[arg(short, long)]
        model: Option<String>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Deck { suit, arcana } => commands::deck::run(suit.as_deref(), arcana.as_deref()),
        Commands::Spreads => commands::spreads::run(),
        Commands::Draw {
            spread,
            seed,
            question,
            json,
            prompt,
        } => commands::draw::run(&spread, seed, question.as_deref(), json, prompt),
        Commands::Read {
            seed,
            reversal_chance,
            shuffle_delay_ms,
            reveal_pause_ms,
            model,
        } => commands::read::run(commands::read::ReadOptions {
            seed,
            reversal_chance,
            shuffle_delay: Duration::from_millis(shuffle_delay_ms),
            reveal_pause: Duration::from_millis(reveal_pause_ms),
            model,
        }),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
