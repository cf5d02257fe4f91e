use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::engine::MAX_HANDS;

/// Метки вариантов ответа.
pub const ANSWER_LETTERS: [char; MAX_HANDS] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

/// Что игрок ввёл в ответ на вопрос.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AnswerCommand {
    /// Выбрана рука с индексом.
    Pick(usize),
    /// Выход из квиза.
    Quit,
}

impl AnswerCommand {
    /// Разобрать ввод игрока для раунда с `hand_count` руками.
    pub fn parse(input: &str, hand_count: usize) -> Result<Self, ApiError> {
        let normalized = input.trim().to_uppercase();
        if normalized == "QUIT" {
            return Ok(AnswerCommand::Quit);
        }

        let mut chars = normalized.chars();
        let index = match (chars.next(), chars.next()) {
            (Some(ch), None) => index_for(ch),
            _ => None,
        }
        .ok_or_else(|| ApiError::InvalidInput(input.trim().to_string()))?;

        if index >= hand_count {
            let max = letter_for(hand_count.saturating_sub(1)).unwrap_or('A');
            return Err(ApiError::ChoiceOutOfRange { max });
        }
        Ok(AnswerCommand::Pick(index))
    }
}

/// 0 → 'A', 1 → 'B', ...
pub fn letter_for(index: usize) -> Option<char> {
    ANSWER_LETTERS.get(index).copied()
}

/// 'A' → 0, 'B' → 1, ...
pub fn index_for(letter: char) -> Option<usize> {
    ANSWER_LETTERS.iter().position(|&l| l == letter)
}
