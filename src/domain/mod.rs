//! Доменная модель: карты, колода, карманные карты, борд.

pub mod card;
pub mod deck;
pub mod errors;
pub mod hand;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use errors::DomainError;
pub use hand::*;
