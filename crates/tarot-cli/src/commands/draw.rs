use colored::Colorize;

use tarot_deck::{draw_with_reversal, full_deck, shuffle, spread_by_id};
use tarot_oracle::build_request;
use tarot_reading::ReadingConfig;

pub fn run(
    spread_id: &str,
    seed: Option<u64>,
    question: Option<&str>,
    json: bool,
    show_prompt: bool,
) -> Result<(), String> {
    let spread = spread_by_id(spread_id).map_err(|e| e.to_string())?;

    let mut config = ReadingConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut rng = config.rng();

    let shuffled = shuffle(full_deck(), &mut rng);
    let drawn = draw_with_reversal(&shuffled, spread, config.reversal_chance, &mut rng)
        .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&drawn).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        println!("  {}", spread.name.bold());
        if let Some(q) = question {
            println!("  Question: {q}");
        }
        println!("{}", super::drawn_table(&drawn, |_| true));
    }

    if show_prompt {
        let question = question.unwrap_or_default();
        if question.trim().is_empty() {
            return Err("a question is needed to build the prompt".into());
        }
        let request = build_request(question, spread, &drawn).map_err(|e| e.to_string())?;
        println!();
        println!("  {}", "System".bold());
        println!("{}", request.system);
        println!();
        println!("  {} (temperature {})", "Prompt".bold(), request.temperature);
        println!("{}", request.prompt);
    }

    Ok(())
}
