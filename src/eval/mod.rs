//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основные функции:
//!   `classify(five) -> HandEvaluation`
//!   `best_of(cards) -> Result<HandEvaluation, EvalError>`

pub mod errors;
pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use errors::EvalError;
pub use evaluator::{best_of, best_of_seven, classify, evaluate_best_hand};
pub use hand_rank::{describe_hand, HandCategory, HandEvaluation};
