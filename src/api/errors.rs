use thiserror::Error;

use crate::engine::QuizError;

/// Ошибки, которые видит игрок в терминале.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Ввод не распознан: не буква A..I и не `quit`.
    #[error("Invalid input. Please enter A, B, C, etc.")]
    InvalidInput(String),

    /// Буква вне диапазона рук в текущем раунде.
    #[error("Invalid choice. Please enter A through {max}.")]
    ChoiceOutOfRange { max: char },

    /// Ошибка движка.
    #[error("quiz error: {0}")]
    Quiz(String),
}

impl From<QuizError> for ApiError {
    fn from(err: QuizError) -> Self {
        ApiError::Quiz(err.to_string())
    }
}
