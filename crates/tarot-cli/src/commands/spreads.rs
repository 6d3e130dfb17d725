pub fn run() -> Result<(), String> {
    super::print_spreads();
    println!();
    println!("  {} spreads", tarot_deck::spreads().len());
    Ok(())
}
