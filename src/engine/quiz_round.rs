use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::{Board, Hand, BOARD_SIZE};
use crate::engine::errors::QuizError;
use crate::engine::RandomSource;
use crate::eval::HandEvaluation;

/// Минимальное количество рук в раунде.
pub const MIN_HANDS: usize = 4;
/// Максимальное количество рук в раунде (варианты ответа A..I).
pub const MAX_HANDS: usize = 9;

/// Один вопрос квиза: борд, 4–9 рук и индекс сильнейшей.
///
/// Оценки рук не хранятся: `evaluate` пересчитывает их по запросу,
/// чтобы клиент мог скрывать ответ до выбора игрока.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRound {
    board: Board,
    hands: Vec<Hand>,
    best_index: usize,
}

/// Раздать новый раунд:
/// - свежая колода перемешивается через `rng`;
/// - первые 5 карт идут на борд;
/// - количество рук выбирается из [MIN_HANDS, MAX_HANDS];
/// - каждой руке по 2 карты из оставшихся, без повторов.
pub fn new_round<R: RandomSource>(rng: &mut R) -> Result<QuizRound, QuizError> {
    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);

    let board = Board::new(draw_exact(&mut deck, BOARD_SIZE)?)?;

    let hand_count = rng.pick_in_range(MIN_HANDS, MAX_HANDS);
    let mut hands = Vec::with_capacity(hand_count);
    for _ in 0..hand_count {
        let cards = draw_exact(&mut deck, 2)?;
        hands.push(Hand::new(cards[0], cards[1]));
    }

    let round = QuizRound::from_parts(board, hands)?;
    log::debug!(
        "dealt round: board [{}], {} hands, best = {}",
        round.board,
        round.hands.len(),
        round.best_index
    );
    Ok(round)
}

fn draw_exact(deck: &mut Deck, wanted: usize) -> Result<Vec<Card>, QuizError> {
    let left = deck.len();
    if left < wanted {
        return Err(QuizError::DeckExhausted { wanted, left });
    }
    Ok(deck.draw_n(wanted))
}

impl QuizRound {
    /// Собрать раунд из готовых карт и сразу найти лучшую руку.
    pub fn from_parts(board: Board, hands: Vec<Hand>) -> Result<Self, QuizError> {
        let best_index = best_hand_index(&board, &hands).ok_or(QuizError::NoHands)?;
        Ok(Self {
            board,
            hands,
            best_index,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }

    /// Индекс сильнейшей руки. При точном равенстве — первая по порядку.
    pub fn best_index(&self) -> usize {
        self.best_index
    }

    pub fn is_correct(&self, index: usize) -> bool {
        index == self.best_index
    }

    /// Оценка руки с индексом `index` против борда.
    pub fn evaluate(&self, index: usize) -> Option<HandEvaluation> {
        self.hands.get(index).map(|h| h.best_hand(&self.board))
    }

    pub fn evaluations(&self) -> Vec<HandEvaluation> {
        self.hands.iter().map(|h| h.best_hand(&self.board)).collect()
    }
}

/// Индекс лучшей руки; строгое сравнение оставляет первую из равных.
fn best_hand_index(board: &Board, hands: &[Hand]) -> Option<usize> {
    let mut best: Option<(usize, HandEvaluation)> = None;
    for (i, hand) in hands.iter().enumerate() {
        let eval = hand.best_hand(board);
        log::trace!("hand {i} [{hand}]: {}", eval.label());
        let is_better = match &best {
            Some((_, best_eval)) => eval.beats(best_eval),
            None => true,
        };
        if is_better {
            best = Some((i, eval));
        }
    }
    best.map(|(i, _)| i)
}
