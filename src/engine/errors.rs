use thiserror::Error;

use crate::domain::DomainError;
use crate::eval::EvalError;

/// Ошибки сборки раунда квиза.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("quiz round needs at least one hand")]
    NoHands,

    #[error("deck exhausted: wanted {wanted} cards, {left} left")]
    DeckExhausted { wanted: usize, left: usize },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
