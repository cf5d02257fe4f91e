use serde::{Deserialize, Serialize};

use crate::api::commands::letter_for;
use crate::domain::card::Card;
use crate::engine::QuizRound;
use crate::eval::{HandCategory, HandEvaluation};

/// DTO оценки руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluationDto {
    pub category: HandCategory,
    /// Код категории: 0 = straight flush … 8 = high card.
    pub category_code: u8,
    pub tiebreakers: Vec<u8>,
    pub label: String,
}

impl From<&HandEvaluation> for EvaluationDto {
    fn from(eval: &HandEvaluation) -> Self {
        Self {
            category: eval.category(),
            category_code: eval.category().code(),
            tiebreakers: eval.tiebreakers().to_vec(),
            label: eval.label().to_string(),
        }
    }
}

/// DTO одной руки в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandDto {
    pub letter: char,
    pub cards: Vec<Card>,
    /// Оценка — только в режиме показа ответа.
    pub evaluation: Option<EvaluationDto>,
}

/// DTO раунда квиза.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizRoundDto {
    pub board: Vec<Card>,
    pub hands: Vec<HandDto>,
    /// Буква лучшей руки — только в режиме показа ответа.
    pub best: Option<char>,
}

impl QuizRoundDto {
    /// `reveal = false` прячет ответ и оценки рук.
    pub fn from_round(round: &QuizRound, reveal: bool) -> Self {
        let hands = round
            .hands()
            .iter()
            .enumerate()
            .map(|(i, hand)| HandDto {
                letter: letter_for(i).unwrap_or('?'),
                cards: hand.cards().to_vec(),
                evaluation: reveal
                    .then(|| round.evaluate(i))
                    .flatten()
                    .map(|e| EvaluationDto::from(&e)),
            })
            .collect();

        Self {
            board: round.board().cards().to_vec(),
            hands,
            best: if reveal {
                letter_for(round.best_index())
            } else {
                None
            },
        }
    }
}
