//! Showdown / сравнение рук.
//!
//! Здесь мы проверяем именно часть "кто сильнее":
//! - монотонность категорий (каждая старшая бьёт каждую младшую);
//! - кикеры внутри категории;
//! - колесо — младший стрит;
//! - законы порядка на случайных руках;
//! - best_of не хуже любого из 21 подмножества.

use std::cmp::Ordering;

use poker_quiz::domain::card::{Card, Rank, Suit};
use poker_quiz::domain::deck::Deck;
use poker_quiz::engine::RandomSource;
use poker_quiz::eval::{best_of, classify, evaluate_best_hand, HandCategory, HandEvaluation};
use poker_quiz::infra::DeterministicRng;

use Rank::*;
use Suit::*;

fn c(rank: Rank, suit: Suit) -> Card {
    Card { rank, suit }
}

/// По одной представительной руке на каждую категорию, от сильнейшей.
fn representatives() -> Vec<[Card; 5]> {
    vec![
        [c(Six, Clubs), c(Five, Clubs), c(Four, Clubs), c(Three, Clubs), c(Two, Clubs)],
        [c(Two, Clubs), c(Two, Diamonds), c(Two, Hearts), c(Two, Spades), c(Three, Clubs)],
        [c(Two, Clubs), c(Two, Diamonds), c(Two, Hearts), c(Three, Spades), c(Three, Clubs)],
        [c(Seven, Hearts), c(Five, Hearts), c(Four, Hearts), c(Three, Hearts), c(Two, Hearts)],
        [c(Ace, Clubs), c(Two, Diamonds), c(Three, Hearts), c(Four, Spades), c(Five, Clubs)],
        [c(Two, Clubs), c(Two, Diamonds), c(Two, Hearts), c(Four, Spades), c(Three, Clubs)],
        [c(Two, Clubs), c(Two, Diamonds), c(Three, Hearts), c(Three, Spades), c(Four, Clubs)],
        [c(Two, Clubs), c(Two, Diamonds), c(Three, Hearts), c(Four, Spades), c(Five, Clubs)],
        [c(Seven, Clubs), c(Five, Diamonds), c(Four, Hearts), c(Three, Spades), c(Two, Clubs)],
    ]
}

//
// ============= Монотонность категорий ============
//
#[test]
fn every_category_beats_every_weaker_category() {
    let evals: Vec<HandEvaluation> = representatives().iter().map(classify).collect();

    for (i, e) in evals.iter().enumerate() {
        assert_eq!(e.category(), HandCategory::ALL[i], "Неверная категория у {:?}", e);
    }

    for i in 0..evals.len() {
        for j in (i + 1)..evals.len() {
            assert!(
                evals[i] > evals[j],
                "{} должен быть сильнее {}",
                evals[i].label(),
                evals[j].label()
            );
            assert!(evals[i].beats(&evals[j]));
            assert!(!evals[j].beats(&evals[i]));
        }
    }
}

#[test]
fn straight_flush_beats_four_of_a_kind_from_seven_cards() {
    // Борд: 9♣, T♣, J♣, Q♣, 2♦
    let board = [
        c(Nine, Clubs),
        c(Ten, Clubs),
        c(Jack, Clubs),
        c(Queen, Clubs),
        c(Two, Diamonds),
    ];

    // Игрок 1: 8♣, K♣ → straight flush
    let r1 = evaluate_best_hand(&[c(Eight, Clubs), c(King, Clubs)], &board).unwrap();
    // Игрок 2: 9♦, 9♥ → сет девяток (каре невозможно без четвёртой)
    let r2 = evaluate_best_hand(&[c(Nine, Diamonds), c(Nine, Hearts)], &board).unwrap();

    assert_eq!(r1.category(), HandCategory::StraightFlush);
    assert_eq!(r1.tiebreakers(), &[13]);
    assert!(r1 > r2);
}

#[test]
fn four_of_a_kind_beats_full_house() {
    // Борд: K♣, K♦, 3♣, 3♦, 7♠
    let board = [
        c(King, Clubs),
        c(King, Diamonds),
        c(Three, Clubs),
        c(Three, Diamonds),
        c(Seven, Spades),
    ];

    // Игрок 1: K♥, K♠ → quads K
    let r1 = evaluate_best_hand(&[c(King, Hearts), c(King, Spades)], &board).unwrap();
    // Игрок 2: 3♥, 7♥ → full house (3–3–3–K–K)
    let r2 = evaluate_best_hand(&[c(Three, Hearts), c(Seven, Hearts)], &board).unwrap();

    assert_eq!(r1.category(), HandCategory::FourOfAKind);
    assert_eq!(r2.category(), HandCategory::FullHouse);
    assert_eq!(r2.tiebreakers(), &[3, 13]);
    assert!(r1 > r2, "Four of a kind должен быть сильнее full house");
}

//
// ============= Кикеры и тайбрейки ============
//
#[test]
fn high_card_compares_lexicographically() {
    let a = classify(&[
        c(Ace, Spades),
        c(King, Hearts),
        c(Queen, Diamonds),
        c(Jack, Clubs),
        c(Nine, Spades),
    ]);
    let b = classify(&[
        c(King, Spades),
        c(Queen, Hearts),
        c(Jack, Diamonds),
        c(Ten, Clubs),
        c(Eight, Spades),
    ]);
    assert_eq!(a.category().code(), 8);
    assert_eq!(b.category().code(), 8);
    assert!(a.tiebreakers() > b.tiebreakers());
    assert!(a > b);
}

#[test]
fn pair_kicker_decides() {
    let board = [
        c(Ace, Spades),
        c(Ace, Hearts),
        c(Nine, Diamonds),
        c(Six, Clubs),
        c(Two, Spades),
    ];
    // у обоих пара тузов, решает старший кикер
    let king = evaluate_best_hand(&[c(King, Clubs), c(Three, Diamonds)], &board).unwrap();
    let queen = evaluate_best_hand(&[c(Queen, Clubs), c(Jack, Diamonds)], &board).unwrap();

    assert_eq!(king.category(), HandCategory::OnePair);
    assert_eq!(king.tiebreakers(), &[14, 13, 9, 6]);
    assert_eq!(queen.tiebreakers(), &[14, 12, 11, 9]);
    assert!(king > queen);
}

#[test]
fn wheel_is_the_lowest_straight() {
    let wheel = classify(&[
        c(Ace, Spades),
        c(Two, Hearts),
        c(Three, Diamonds),
        c(Four, Clubs),
        c(Five, Spades),
    ]);
    let six_high = classify(&[
        c(Two, Spades),
        c(Three, Hearts),
        c(Four, Diamonds),
        c(Five, Clubs),
        c(Six, Spades),
    ]);
    assert!(six_high > wheel, "Стрит до шестёрки сильнее колеса");
}

#[test]
fn split_when_board_plays() {
    // На борде бродвей, карманные карты не улучшают руку
    let board = [
        c(Ace, Spades),
        c(King, Hearts),
        c(Queen, Diamonds),
        c(Jack, Clubs),
        c(Ten, Spades),
    ];
    let r1 = evaluate_best_hand(&[c(Two, Clubs), c(Three, Diamonds)], &board).unwrap();
    let r2 = evaluate_best_hand(&[c(Four, Clubs), c(Five, Diamonds)], &board).unwrap();

    assert_eq!(r1.cmp(&r2), Ordering::Equal);
    assert_eq!(r1, r2);
    assert!(!r1.beats(&r2) && !r2.beats(&r1));
}

//
// ============= Свойства на случайных руках ============
//

fn random_seven(rng: &mut DeterministicRng) -> [Card; 7] {
    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);
    let cards = deck.draw_n(7);
    [cards[0], cards[1], cards[2], cards[3], cards[4], cards[5], cards[6]]
}

#[test]
fn ordering_is_a_total_order_on_random_hands() {
    let mut rng = DeterministicRng::from_seed(2024);
    let evals: Vec<HandEvaluation> = (0..60)
        .map(|_| {
            let seven = random_seven(&mut rng);
            classify(&[seven[0], seven[1], seven[2], seven[3], seven[4]])
        })
        .collect();

    for a in &evals {
        // иррефлексивность
        assert!(!a.beats(a));
        for b in &evals {
            // антисимметрия: ровно один сильнее, либо равны целиком
            match a.cmp(b) {
                Ordering::Greater => assert_eq!(b.cmp(a), Ordering::Less),
                Ordering::Less => assert_eq!(b.cmp(a), Ordering::Greater),
                Ordering::Equal => {
                    assert_eq!(a.category(), b.category());
                    assert_eq!(a.tiebreakers(), b.tiebreakers());
                }
            }
            for x in &evals {
                // транзитивность
                if a > b && b > x {
                    assert!(a > x);
                }
            }
        }
    }
}

#[test]
fn best_of_dominates_all_21_subsets() {
    let mut rng = DeterministicRng::from_seed(77);

    for _ in 0..200 {
        let seven = random_seven(&mut rng);
        let best = best_of(&seven).unwrap();

        let mut subsets = 0;
        for skip_a in 0..7 {
            for skip_b in (skip_a + 1)..7 {
                let five: Vec<Card> = (0..7)
                    .filter(|&i| i != skip_a && i != skip_b)
                    .map(|i| seven[i])
                    .collect();
                let five = [five[0], five[1], five[2], five[3], five[4]];
                let e = classify(&five);
                assert!(best >= e, "{} хуже подмножества {}", best.label(), e.label());
                subsets += 1;
            }
        }
        assert_eq!(subsets, 21);
    }
}
