//! Движок квиза: сборка раунда, подсчёт очков.
//!
//! Основные операции:
//!   - `new_round` – раздать борд и 4–9 рук из свежей перемешанной колоды
//!   - `QuizRound::best_index` – какая рука сильнее всех
//!   - `Scoreboard::record` – учесть ответ игрока

pub mod errors;
pub mod quiz_round;
pub mod score;

pub use errors::QuizError;
pub use quiz_round::{new_round, QuizRound, MAX_HANDS, MIN_HANDS};
pub use score::Scoreboard;

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Случайное число из отрезка `[low, high]` включительно.
    fn pick_in_range(&mut self, low: usize, high: usize) -> usize;
}
