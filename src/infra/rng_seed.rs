//! RngSeed — seed сессии квиза.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32], обычно из `--seed <u64>`)
//!   - выводить seed каждого раунда детерминированно:
//!         new = H(domain || session_seed || round_index)
//!   - создавать DeterministicRng из seed
//!
//! Одинаковый seed сессии → одинаковая последовательность раундов.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для CLI и тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed конкретного раунда внутри сессии.
    pub fn derive(&self, round_index: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"POKER_QUIZ_ROUND_V1");
        hasher.update(self.bytes);
        hasher.update(round_index.to_le_bytes());

        let mut out = [0u8; 32];
        out.copy_from_slice(&hasher.finalize());
        Self { bytes: out }
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed_bytes(self.bytes)
    }
}
