//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use poker_quiz::domain::*;

use Rank::*;
use Suit::*;

fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Карта хранит ранг и масть, равенство структурное.
#[test]
fn card_fields_and_equality() {
    let a = c(Ace, Spades);
    assert_eq!(a.rank, Ace);
    assert_eq!(a.suit, Spades);

    assert_eq!(a, c(Ace, Spades));
    assert_ne!(a, c(Ace, Hearts));
    assert_ne!(a, c(King, Spades));

    let set: HashSet<Card> = [a, c(Ace, Spades), c(Ace, Hearts)].into_iter().collect();
    assert_eq!(set.len(), 2, "Одинаковые карты должны давать одинаковый хэш");
}

/// Червы и бубны красные, трефы и пики — чёрные.
#[test]
fn card_is_red() {
    assert!(c(Ace, Hearts).is_red());
    assert!(c(Two, Diamonds).is_red());
    assert!(!c(Ace, Spades).is_red());
    assert!(!c(Ten, Clubs).is_red());
}

/// Ранги упорядочены по числовому значению.
#[test]
fn rank_values_and_order() {
    assert_eq!(Two.value(), 2);
    assert_eq!(Ten.value(), 10);
    assert_eq!(Ace.value(), 14);
    assert!(Ace > King);
    assert!(Three > Two);

    assert_eq!(Rank::from_value(11), Some(Jack));
    assert_eq!(Rank::from_value(1), None);
    assert_eq!(Rank::from_value(15), None);
    assert_eq!(Rank::ALL.len(), 13);
}

#[test]
fn rank_names() {
    assert_eq!(rank_name(2), "Two");
    assert_eq!(rank_name(11), "Jack");
    assert_eq!(rank_name(13), "King");
    assert_eq!(rank_name(14), "Ace");
    // вне диапазона — просто число
    assert_eq!(rank_name(99), "99");
}

#[test]
fn card_display() {
    assert_eq!(c(Ace, Hearts).to_string(), "A♥");
    assert_eq!(c(Ten, Spades).to_string(), "10♠");
    assert_eq!(c(Seven, Clubs).to_string(), "7♣");
    assert_eq!(c(Queen, Diamonds).to_string(), "Q♦");
}

#[test]
fn card_from_str() {
    assert_eq!("Ah".parse::<Card>(), Ok(c(Ace, Hearts)));
    assert_eq!("Td".parse::<Card>(), Ok(c(Ten, Diamonds)));
    assert_eq!("10s".parse::<Card>(), Ok(c(Ten, Spades)));
    assert_eq!("7C".parse::<Card>(), Ok(c(Seven, Clubs)));

    assert!("".parse::<Card>().is_err());
    assert!("A".parse::<Card>().is_err());
    assert!("1h".parse::<Card>().is_err());
    assert!("Ax".parse::<Card>().is_err());
    assert_eq!(
        "Zz".parse::<Card>(),
        Err(DomainError::InvalidCard("Zz".to_string()))
    );
}

/// Колода: 52 уникальные карты, 13 рангов, 4 масти.
#[test]
fn standard_deck_has_52_unique_cards() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(unique.len(), 52);

    let ranks: HashSet<Rank> = deck.cards.iter().map(|c| c.rank).collect();
    let suits: HashSet<Suit> = deck.cards.iter().map(|c| c.suit).collect();
    assert_eq!(ranks.len(), 13);
    assert_eq!(suits.len(), 4);
}

/// draw_n берёт карты сверху и не больше, чем есть.
#[test]
fn deck_draw_n_from_top() {
    let mut deck = Deck::standard_52();
    let top: Vec<Card> = deck.cards[..5].to_vec();

    let drawn = deck.draw_n(5);
    assert_eq!(drawn, top);
    assert_eq!(deck.len(), 47);

    let rest = deck.draw_n(100);
    assert_eq!(rest.len(), 47);
    assert!(deck.is_empty());
    assert!(deck.draw_n(1).is_empty());
}

#[test]
fn hand_holds_two_cards() {
    let hand = Hand::new(c(Ace, Spades), c(King, Spades));
    assert_eq!(hand.cards(), [c(Ace, Spades), c(King, Spades)]);
    assert_eq!(hand.to_string(), "A♠ K♠");
}

#[test]
fn board_requires_exactly_five_cards() {
    let five = vec![
        c(Ace, Spades),
        c(King, Hearts),
        c(Seven, Clubs),
        c(Four, Diamonds),
        c(Two, Spades),
    ];
    let board = Board::new(five.clone()).expect("5 карт — валидный борд");
    assert_eq!(board.cards(), five.as_slice());
    assert_eq!(board.to_string(), "A♠ K♥ 7♣ 4♦ 2♠");

    let four = five[..4].to_vec();
    let err = Board::new(four).unwrap_err();
    assert_eq!(err, DomainError::InvalidBoardSize { got: 4 });
    assert_eq!(err.to_string(), "board must have exactly 5 cards, got 4");

    let mut six = five.clone();
    six.push(c(Three, Hearts));
    assert_eq!(
        Board::new(six).unwrap_err(),
        DomainError::InvalidBoardSize { got: 6 }
    );

    assert!(Board::new(Vec::new()).is_err());
}

/// Рука + борд → лучшая комбинация из 7 карт.
#[test]
fn hand_best_hand_against_board() {
    let board = Board::new(vec![
        c(Queen, Spades),
        c(Jack, Spades),
        c(Ten, Spades),
        c(Two, Hearts),
        c(Three, Clubs),
    ])
    .unwrap();
    let hand = Hand::new(c(Ace, Spades), c(King, Spades));

    let eval = hand.best_hand(&board);
    assert_eq!(eval.category().code(), 0);
    assert_eq!(eval.tiebreakers(), &[14]);
}
