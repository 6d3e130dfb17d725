//! Interpretation request builder.
//!
//! Renders a completed spread into the persona, prompt and sampling settings
//! sent to the text-generation service. Output is deterministic for a given
//! question, spread and draw.

use serde::Serialize;
use tarot_deck::{DrawnCard, Spread};

use crate::error::{OracleError, OracleResult};

/// Persona handed to the model as its system instruction.
pub const SYSTEM_PERSONA: &str =
    "You are a professional Tarot reader with a mystical but grounded persona.";

/// Sampling temperature; slightly creative.
pub const DEFAULT_TEMPERATURE: f32 = 0.8;

/// Everything the text-generation service needs for one interpretation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterpretationRequest {
    /// System persona text.
    pub system: String,
    /// User prompt describing the question and the cards.
    pub prompt: String,
    /// Sampling temperature.
    pub temperature: f32,
}

/// Build the interpretation request for a finished reading.
///
/// Cards are listed in `results` order, which is spread position order.
/// Fails if `results` does not fill the spread.
pub fn build_request(
    question: &str,
    spread: &Spread,
    results: &[DrawnCard],
) -> OracleResult<InterpretationRequest> {
    if results.is_empty() || results.len() != spread.card_count {
        return Err(OracleError::IncompleteReading {
            expected: spread.card_count,
            actual: results.len(),
        });
    }

    let cards = results
        .iter()
        .map(describe_card)
        .collect::<Vec<_>>()
        .join("\n");

    let mut prompt = String::new();
    prompt.push_str("You are a wise, mystical, and empathetic Tarot reader.\n");
    prompt.push_str(&format!(
        "The user has asked the following question: \"{}\".\n\n",
        question.trim()
    ));
    prompt.push_str(&format!(
        "They have chosen the \"{}\" spread.\n\n",
        spread.name
    ));
    prompt.push_str("Here are the cards drawn:\n");
    prompt.push_str(&cards);
    prompt.push_str("\n\n");
    prompt.push_str(INSTRUCTIONS);

    Ok(InterpretationRequest {
        system: SYSTEM_PERSONA.to_string(),
        prompt,
        temperature: DEFAULT_TEMPERATURE,
    })
}

const INSTRUCTIONS: &str = "\
Please provide a comprehensive interpretation of this reading.
1. Start with a general sense of the energy.
2. Interpret each card in its specific position, considering whether it is upright or reversed.
3. Synthesize the cards together to answer the user's question directly.
4. Provide a supportive and empowering conclusion.

Format your response in clean Markdown. Use bolding for emphasis and card names.
Do not be overly fatalistic; focus on guidance and self-reflection.
";

fn describe_card(drawn: &DrawnCard) -> String {
    format!(
        "- Position: {} ({})\n  - Card: {} ({})\n  - Arcana: {}",
        drawn.position.name,
        drawn.position.description,
        drawn.card.name,
        drawn.orientation(),
        drawn.card.arcana,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarot_deck::spread::{SINGLE, THREE_CARD};
    use tarot_deck::{card_by_id, full_deck};

    fn three_card_reading() -> Vec<DrawnCard> {
        [(17, false), (37, true), (1, false)]
            .iter()
            .zip(THREE_CARD.positions)
            .map(|(&(id, reversed), position)| DrawnCard {
                card: card_by_id(id).unwrap().clone(),
                position: *position,
                is_reversed: reversed,
            })
            .collect()
    }

    #[test]
    fn renders_every_card_in_position_order() {
        let req = build_request("Where is my career going?", &THREE_CARD, &three_card_reading())
            .unwrap();

        let past = req.prompt.find("Position: Past").unwrap();
        let present = req.prompt.find("Position: Present").unwrap();
        let future = req.prompt.find("Position: Future").unwrap();
        assert!(past < present && present < future);

        assert!(req.prompt.contains("- Card: The Tower (Upright)"));
        assert!(req.prompt.contains("- Card: Ace of Cups (Reversed)"));
        assert!(req.prompt.contains("- Card: The Fool (Upright)"));
        assert!(req.prompt.contains("- Arcana: Minor Arcana"));
        assert!(req.prompt.contains("(Influences from the past affecting the situation.)"));
    }

    #[test]
    fn includes_question_spread_and_instructions() {
        let req = build_request("  Will I find love?  ", &THREE_CARD, &three_card_reading())
            .unwrap();
        assert!(req.prompt.contains("question: \"Will I find love?\""));
        assert!(req.prompt.contains("\"Past, Present, Future\" spread"));
        assert!(req.prompt.contains("general sense of the energy"));
        assert!(req.prompt.contains("upright or reversed"));
        assert!(req.prompt.contains("answer the user's question"));
        assert!(req.prompt.contains("supportive and empowering conclusion"));
        assert!(req.prompt.contains("Markdown"));
        assert!(req.prompt.contains("Do not be overly fatalistic"));
        assert_eq!(req.system, SYSTEM_PERSONA);
        assert_eq!(req.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn deterministic() {
        let a = build_request("q", &THREE_CARD, &three_card_reading()).unwrap();
        let b = build_request("q", &THREE_CARD, &three_card_reading()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_incomplete_reading() {
        let mut partial = three_card_reading();
        partial.pop();
        assert_eq!(
            build_request("q", &THREE_CARD, &partial).unwrap_err(),
            OracleError::IncompleteReading {
                expected: 3,
                actual: 2
            }
        );
        assert!(build_request("q", &SINGLE, &[]).is_err());
    }

    #[test]
    fn single_card_reading() {
        let drawn = vec![DrawnCard {
            card: full_deck()[0].clone(),
            position: SINGLE.positions[0],
            is_reversed: true,
        }];
        let req = build_request("Today?", &SINGLE, &drawn).unwrap();
        assert!(req.prompt.contains("- Position: The Answer (The core insight into your query.)"));
        assert!(req.prompt.contains("- Card: The Fool (Reversed)"));
        assert!(req.prompt.contains("- Arcana: Major Arcana"));
    }
}
