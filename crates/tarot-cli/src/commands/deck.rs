use comfy_table::{ContentArrangement, Table};

use tarot_deck::deck::filter;
use tarot_deck::{Arcana, Suit};

pub fn run(suit: Option<&str>, arcana: Option<&str>) -> Result<(), String> {
    let suit = suit.map(Suit::parse).transpose().map_err(|e| e.to_string())?;
    let arcana = arcana
        .map(Arcana::parse)
        .transpose()
        .map_err(|e| e.to_string())?;

    let cards = filter(suit, arcana);
    if cards.is_empty() {
        println!("  No cards found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Suit", "Arcana", "Keywords"]);

    for card in &cards {
        let suit = card
            .suit
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            card.id.to_string(),
            card.name.clone(),
            suit,
            card.arcana.to_string(),
            card.keywords.join(", "),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", cards.len());

    Ok(())
}
