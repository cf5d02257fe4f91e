use thiserror::Error;

/// Ошибки построения доменных значений.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("board must have exactly 5 cards, got {got}")]
    InvalidBoardSize { got: usize },

    #[error("invalid card: {0:?}")]
    InvalidCard(String),
}
