use crate::domain::card::{Card, Rank};

use super::errors::EvalError;
use super::hand_rank::{HandCategory, HandEvaluation};
use super::lookup_tables::{detect_straight, RankCounts};

/// Оценка строго 5-карточной комбинации.
///
/// Категории проверяются от сильнейшей к слабейшей, первая подошедшая
/// возвращается. Дубликаты карт не проверяются.
pub fn classify(cards: &[Card; 5]) -> HandEvaluation {
    let mut ranks: [Rank; 5] = cards.map(|c| c.rank);
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = detect_straight(&ranks);

    let counts = RankCounts::from_ranks(&ranks);
    let groups = counts.groups();
    let pattern: Vec<u8> = groups.iter().map(|&(_, c)| c).collect();

    // Ранги групп в порядке значимости: для [3,2] это [трипс, пара],
    // для [2,2,1] — [старшая пара, младшая пара, кикер] и т.д.
    let grouped: Vec<u8> = groups.iter().map(|&(r, _)| r.value()).collect();

    // Straight flush.
    if is_flush {
        if let Some(high) = straight_high {
            return HandEvaluation::new(HandCategory::StraightFlush, vec![high.value()]);
        }
    }

    // Four of a kind: 4+1
    if pattern == [4, 1] {
        return HandEvaluation::new(HandCategory::FourOfAKind, grouped);
    }

    // Full house: 3+2
    if pattern == [3, 2] {
        return HandEvaluation::new(HandCategory::FullHouse, grouped);
    }

    // Flush: все пять рангов по убыванию.
    if is_flush {
        return HandEvaluation::new(HandCategory::Flush, grouped);
    }

    // Straight.
    if let Some(high) = straight_high {
        return HandEvaluation::new(HandCategory::Straight, vec![high.value()]);
    }

    // Three of a kind: 3+1+1
    if pattern == [3, 1, 1] {
        return HandEvaluation::new(HandCategory::ThreeOfAKind, grouped);
    }

    // Two pair: 2+2+1
    if pattern == [2, 2, 1] {
        return HandEvaluation::new(HandCategory::TwoPair, grouped);
    }

    // One pair: 2+1+1+1
    if pattern == [2, 1, 1, 1] {
        return HandEvaluation::new(HandCategory::OnePair, grouped);
    }

    // High card: 1+1+1+1+1
    HandEvaluation::new(HandCategory::HighCard, grouped)
}

/// Лучшая 5-карточная рука из произвольного набора карт (минимум 5).
///
/// Перебираются все сочетания по 5; при равенстве остаётся первое найденное.
pub fn best_of(cards: &[Card]) -> Result<HandEvaluation, EvalError> {
    if cards.len() < 5 {
        return Err(EvalError::InsufficientCards { got: cards.len() });
    }
    Ok(best_of_all_5card_combinations(cards))
}

/// Лучшая рука из ровно семи карт (2 карманные + 5 на борде). Ошибки быть не может.
pub fn best_of_seven(cards: &[Card; 7]) -> HandEvaluation {
    best_of_all_5card_combinations(cards)
}

/// Удобная обёртка: карманные карты + борд.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> Result<HandEvaluation, EvalError> {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);
    best_of(&all_cards)
}

/// Перебираем все комбинации 5 карт из N и выбираем лучшую.
/// Вызывающий гарантирует N >= 5.
fn best_of_all_5card_combinations(cards: &[Card]) -> HandEvaluation {
    let n = cards.len();
    debug_assert!(n >= 5);

    // Стартуем с первого сочетания, оно же будет первым в переборе.
    let mut best = classify(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
    let mut evaluated = 0usize;

    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let r = classify(&five);
                        evaluated += 1;
                        if r > best {
                            best = r;
                        }
                    }
                }
            }
        }
    }

    log::trace!("best of {n} cards: {} ({evaluated} combinations)", best.label());
    best
}
