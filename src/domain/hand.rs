use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::errors::DomainError;
use crate::eval::{best_of_seven, HandEvaluation};

/// Сколько карт лежит на борде.
pub const BOARD_SIZE: usize = 5;

/// Карманные карты одного участника. После раздачи не меняются.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; 2],
}

impl Hand {
    pub const fn new(first: Card, second: Card) -> Self {
        Self {
            cards: [first, second],
        }
    }

    pub const fn cards(&self) -> [Card; 2] {
        self.cards
    }

    /// Лучшая 5-карточная комбинация из двух своих карт и пяти общих.
    pub fn best_hand(&self, board: &Board) -> HandEvaluation {
        let [h1, h2] = self.cards;
        let [b1, b2, b3, b4, b5] = board.cards;
        best_of_seven(&[h1, h2, b1, b2, b3, b4, b5])
    }
}

/// Общие карты раунда — ровно пять.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    cards: [Card; BOARD_SIZE],
}

impl Board {
    pub fn new(cards: Vec<Card>) -> Result<Self, DomainError> {
        let got = cards.len();
        let cards: [Card; BOARD_SIZE] = cards
            .try_into()
            .map_err(|_| DomainError::InvalidBoardSize { got })?;
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{card}")?;
    }
    Ok(())
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)
    }
}
