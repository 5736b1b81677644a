//! Public request and output records for level generation.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{CellKind, Pos};

use super::fault::CarveFault;
use super::grid::Grid;
use super::progression::Algorithm;
use super::seed::SeedInput;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelRequest {
    pub realm: u32,
    pub level: u32,
    pub seed: SeedInput,
}

impl LevelRequest {
    pub fn new(realm: u32, level: u32, seed: impl Into<SeedInput>) -> Self {
        Self { realm, level, seed: seed.into() }
    }
}

impl Default for LevelRequest {
    fn default() -> Self {
        Self { realm: 1, level: 1, seed: SeedInput::from_wall_clock() }
    }
}

/// Records that the requested algorithm faulted and the backtracker carved the level instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FallbackEvent {
    pub requested: Algorithm,
    pub fault: CarveFault,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDescriptor {
    pub grid: Grid,
    pub width: usize,
    pub height: usize,
    pub start: Pos,
    pub goal: Pos,
    pub total_level: u32,
    pub realm: u32,
    pub level: u32,
    pub seed: i32,
    pub mode: Algorithm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackEvent>,
}

impl LevelDescriptor {
    pub fn cell_at(&self, pos: Pos) -> CellKind {
        self.grid.cell(pos)
    }

    /// Numeric cell codes, `rows()[y][x]`.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.grid.rows().map(|row| row.iter().map(|cell| cell.code()).collect()).collect()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.width * self.height + 64);
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        bytes.extend(self.grid.cells().iter().map(|cell| cell.code()));
        bytes.extend(self.start.y.to_le_bytes());
        bytes.extend(self.start.x.to_le_bytes());
        bytes.extend(self.goal.y.to_le_bytes());
        bytes.extend(self.goal.x.to_le_bytes());
        bytes.extend(self.total_level.to_le_bytes());
        bytes.extend(self.realm.to_le_bytes());
        bytes.extend(self.level.to_le_bytes());
        bytes.extend(self.seed.to_le_bytes());
        bytes.extend(self.mode.name().as_bytes());
        bytes.push(u8::from(self.fallback.is_some()));
        bytes
    }

    /// Stable 64-bit hash of `canonical_bytes`.
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
