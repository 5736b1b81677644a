//! Seed resolution from caller input and per-level RNG seed derivation.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

const REALM_SEED_MULTIPLIER: u32 = 15_485_863;
const LEVEL_SEED_MULTIPLIER: u32 = 32_452_843;

/// Caller-supplied seed, either an integer or free text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedInput {
    Numeric(i64),
    Textual(String),
}

impl SeedInput {
    /// Seed drawn from wall-clock milliseconds, used when the caller gives none.
    pub fn from_wall_clock() -> Self {
        let millis =
            SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |elapsed| elapsed.as_millis());
        Self::Numeric(millis as i64)
    }

    /// Canonical 32-bit seed. Never fails; unusable text folds to 0.
    pub fn resolve(&self) -> i32 {
        match self {
            Self::Numeric(value) => *value as i32,
            Self::Textual(text) => fold_text_seed(text),
        }
    }
}

impl From<i64> for SeedInput {
    fn from(value: i64) -> Self {
        Self::Numeric(value)
    }
}

impl From<i32> for SeedInput {
    fn from(value: i32) -> Self {
        Self::Numeric(i64::from(value))
    }
}

impl From<u32> for SeedInput {
    fn from(value: u32) -> Self {
        Self::Numeric(i64::from(value))
    }
}

impl From<&str> for SeedInput {
    fn from(value: &str) -> Self {
        Self::Textual(value.to_owned())
    }
}

impl From<String> for SeedInput {
    fn from(value: String) -> Self {
        Self::Textual(value)
    }
}

fn fold_text_seed(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0_i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Decorrelates adjacent levels and realms that share one base seed.
pub(super) fn derive_rng_seed(resolved_seed: i32, realm: u32, level: u32) -> u32 {
    (resolved_seed as u32)
        ^ realm.wrapping_mul(REALM_SEED_MULTIPLIER)
        ^ level.wrapping_mul(LEVEL_SEED_MULTIPLIER)
}
