//! Текстовое представление раунда для терминала.
//! Красные масти подсвечиваются через `colored`.

use colored::Colorize;

use crate::api::commands::letter_for;
use crate::domain::card::Card;
use crate::engine::QuizRound;

pub const RULE_WIDTH: usize = 60;

pub fn format_card(card: &Card) -> String {
    let text = card.to_string();
    if card.is_red() {
        text.red().to_string()
    } else {
        text
    }
}

pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

/// Вопрос квиза. `reveal` добавляет маркер у лучшей руки.
pub fn format_round(round: &QuizRound, reveal: bool) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&format!("\n{rule}\nTEXAS HOLD'EM BEST HAND QUIZ\n{rule}\n"));
    out.push_str("\nBoard (Community Cards):\n");
    out.push_str(&format_cards(round.board().cards()));
    out.push_str("\n\nPlayer Hands:\n");

    for (i, hand) in round.hands().iter().enumerate() {
        let letter = letter_for(i).unwrap_or('?');
        let marker = if reveal && round.is_correct(i) {
            format!(" {}", "← BEST HAND".green().bold())
        } else {
            String::new()
        };
        out.push_str(&format!("  {letter}) {}{marker}\n", format_cards(&hand.cards())));
    }
    out
}
