//! Квиз по Texas Hold'em: какая рука сильнее на данном борде.
//!
//! Слои:
//! - `domain` — карты, колода, руки, борд;
//! - `eval` — классификация 5 карт, лучшая 5 из 7, порядок рук;
//! - `engine` — сборка раунда квиза, счёт;
//! - `infra` — RNG;
//! - `api` — разбор ответов, DTO и форматирование для терминала.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
