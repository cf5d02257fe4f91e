//! Инфраструктурный слой вокруг движка квиза:
//! - RNG-реализации для engine;
//! - seed сессии и вывод seed'ов раундов.

pub mod rng;
pub mod rng_seed;

pub use rng::*;
pub use rng_seed::RngSeed;
