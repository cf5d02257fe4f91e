use thiserror::Error;

/// Ошибки оценки рук.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("need at least 5 cards to evaluate a hand, got {got}")]
    InsufficientCards { got: usize },
}
