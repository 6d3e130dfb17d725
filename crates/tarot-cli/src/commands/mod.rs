pub mod deck;
pub mod draw;
pub mod read;
pub mod spreads;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use tarot_deck::DrawnCard;

/// Render drawn cards as a table. Hidden cards show only their position.
fn drawn_table(drawn: &[DrawnCard], revealed: impl Fn(usize) -> bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Position", "Card", "Orientation", "Arcana"]);

    for (i, entry) in drawn.iter().enumerate() {
        let number = (i + 1).to_string();
        if revealed(i) {
            table.add_row(vec![
                number,
                entry.position.name.to_string(),
                entry.card.name.clone(),
                entry.orientation().to_string(),
                entry.card.arcana.to_string(),
            ]);
        } else {
            table.add_row(vec![
                number,
                entry.position.name.to_string(),
                "(face down)".to_string(),
                "-".to_string(),
                "-".to_string(),
            ]);
        }
    }
    table
}

/// Print the spread listing shared by `tarot spreads` and the reading help.
fn print_spreads() {
    for spread in tarot_deck::spreads() {
        println!(
            "  {} {}: {} ({} card{})",
            spread.id.bold(),
            spread.name,
            spread.description,
            spread.card_count,
            if spread.card_count == 1 { "" } else { "s" },
        );
        for position in spread.positions {
            println!(
                "      {}. {}: {}",
                position.index + 1,
                position.name,
                position.description
            );
        }
    }
}
