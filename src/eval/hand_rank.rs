use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::card::rank_name;

/// Категория покерной руки по силе.
///
/// Код категории: 0 — сильнейшая (straight flush), 8 — слабейшая (high card).
/// `Ord` устроен так, что более сильная категория — «больше».
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HandCategory {
    StraightFlush = 0,
    FourOfAKind = 1,
    FullHouse = 2,
    Flush = 3,
    Straight = 4,
    ThreeOfAKind = 5,
    TwoPair = 6,
    OnePair = 7,
    HighCard = 8,
}

impl HandCategory {
    /// Все категории от сильнейшей к слабейшей.
    pub const ALL: [HandCategory; 9] = [
        HandCategory::StraightFlush,
        HandCategory::FourOfAKind,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::ThreeOfAKind,
        HandCategory::TwoPair,
        HandCategory::OnePair,
        HandCategory::HighCard,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<HandCategory> {
        HandCategory::ALL.get(code as usize).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::OnePair => "One Pair",
            HandCategory::HighCard => "High Card",
        }
    }
}

impl Ord for HandCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        // меньший код = сильнее
        other.code().cmp(&self.code())
    }
}

impl PartialOrd for HandCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Результат оценки руки: категория, вектор тайбрейков и подпись.
///
/// Сравнение: сначала категория, затем тайбрейки лексикографически
/// (больший элемент выигрывает). Подпись в сравнении не участвует.
/// Внутри одной категории векторы всегда одной длины.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HandEvaluation {
    category: HandCategory,
    tiebreakers: Vec<u8>,
    label: String,
}

impl HandEvaluation {
    /// Собрать оценку; подпись строится из категории и тайбрейков.
    pub fn new(category: HandCategory, tiebreakers: Vec<u8>) -> Self {
        let label = describe_hand(category, &tiebreakers);
        Self {
            category,
            tiebreakers,
            label,
        }
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    pub fn tiebreakers(&self) -> &[u8] {
        &self.tiebreakers
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Строго сильнее другой руки.
    pub fn beats(&self, other: &HandEvaluation) -> bool {
        self > other
    }
}

impl PartialEq for HandEvaluation {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.tiebreakers == other.tiebreakers
    }
}

impl Eq for HandEvaluation {}

impl Ord for HandEvaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.tiebreakers.cmp(&other.tiebreakers))
    }
}

impl PartialOrd for HandEvaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Человеческое описание руки, например "Full House (Aces over Kings)".
pub fn describe_hand(category: HandCategory, tiebreakers: &[u8]) -> String {
    let name = |i: usize| tiebreakers.get(i).map(|&v| rank_name(v)).unwrap_or_default();

    match category {
        HandCategory::StraightFlush => format!("Straight Flush ({} high)", name(0)),
        HandCategory::FourOfAKind => format!("Four of a Kind ({}s)", name(0)),
        HandCategory::FullHouse => format!("Full House ({}s over {}s)", name(0), name(1)),
        HandCategory::Flush => format!("Flush ({} high)", name(0)),
        HandCategory::Straight => format!("Straight ({} high)", name(0)),
        HandCategory::ThreeOfAKind => format!("Three of a Kind ({}s)", name(0)),
        HandCategory::TwoPair => format!("Two Pair ({}s and {}s)", name(0), name(1)),
        HandCategory::OnePair => format!("Pair of {}s", name(0)),
        HandCategory::HighCard => format!("High Card ({})", name(0)),
    }
}
