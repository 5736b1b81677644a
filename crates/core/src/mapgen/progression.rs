//! Level progression: grid size by linear level index, algorithm by realm.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const MAX_TOTAL_LEVEL: u32 = 100;
pub const LEVELS_PER_REALM: u32 = 10;

const GRID_SIZE_BY_TOTAL_LEVEL: [usize; MAX_TOTAL_LEVEL as usize] = [
    25, 25, 25, 27, 27, 27, 29, 29, 29, 31, //
    31, 31, 33, 33, 33, 35, 35, 35, 37, 37, //
    37, 39, 39, 39, 41, 41, 41, 43, 43, 43, //
    45, 45, 45, 47, 47, 47, 49, 49, 49, 51, //
    51, 51, 53, 53, 53, 55, 55, 55, 57, 57, //
    57, 59, 59, 59, 61, 61, 61, 63, 63, 63, //
    65, 65, 65, 67, 67, 67, 69, 69, 69, 71, //
    71, 71, 73, 73, 73, 75, 75, 75, 77, 77, //
    77, 79, 79, 79, 81, 81, 81, 83, 83, 83, //
    85, 85, 85, 87, 87, 87, 89, 89, 89, 91,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Backtracker,
    Prim,
    Kruskal,
    #[serde(rename = "huntandkill")]
    HuntAndKill,
    #[serde(rename = "aldousbroder")]
    AldousBroder,
    Wilson,
    #[serde(rename = "growingtree_longrooms")]
    GrowingTreeLongRooms,
    #[serde(rename = "growingtree_short")]
    GrowingTreeShort,
    RecursiveDivision,
    BacktrackerSparse,
}

impl Algorithm {
    /// Realm rotation order; realm `r` uses slot `(r - 1) % 10`.
    pub const ALL: [Self; 10] = [
        Self::Backtracker,
        Self::Prim,
        Self::Kruskal,
        Self::HuntAndKill,
        Self::AldousBroder,
        Self::Wilson,
        Self::GrowingTreeLongRooms,
        Self::GrowingTreeShort,
        Self::RecursiveDivision,
        Self::BacktrackerSparse,
    ];

    pub fn for_realm(realm: u32) -> Self {
        let slot = (realm.max(1) - 1) as usize % Self::ALL.len();
        Self::ALL[slot]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Backtracker => "backtracker",
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
            Self::HuntAndKill => "huntandkill",
            Self::AldousBroder => "aldousbroder",
            Self::Wilson => "wilson",
            Self::GrowingTreeLongRooms => "growingtree_longrooms",
            Self::GrowingTreeShort => "growingtree_short",
            Self::RecursiveDivision => "recursive_division",
            Self::BacktrackerSparse => "backtracker_sparse",
        }
    }

    /// Every algorithm except recursive division yields a spanning tree over rooms.
    pub const fn produces_perfect_maze(self) -> bool {
        !matches!(self, Self::RecursiveDivision)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown maze algorithm '{}'", self.0)
    }
}

impl Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == raw)
            .ok_or_else(|| UnknownAlgorithm(raw.to_owned()))
    }
}

/// Linear 1..=100 index of `(realm, level)`, clamped into the table.
pub fn total_level_index(realm: u32, level: u32) -> u32 {
    let total = (i64::from(realm) - 1) * i64::from(LEVELS_PER_REALM) + i64::from(level);
    total.clamp(1, i64::from(MAX_TOTAL_LEVEL)) as u32
}

/// Odd grid dimension for a total level index.
pub fn grid_size(total_level: u32) -> usize {
    let slot = total_level.clamp(1, MAX_TOTAL_LEVEL) as usize - 1;
    let size = GRID_SIZE_BY_TOTAL_LEVEL[slot];
    if size % 2 == 1 { size } else { size + 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_is_odd() {
        for total in 1..=MAX_TOTAL_LEVEL {
            assert_eq!(grid_size(total) % 2, 1, "total level {total} produced an even size");
        }
    }

    #[test]
    fn sizes_never_shrink_and_step_by_two_every_three_levels() {
        for total in 2..=MAX_TOTAL_LEVEL {
            assert!(grid_size(total) >= grid_size(total - 1));
        }
        assert_eq!(grid_size(1), 25);
        assert_eq!(grid_size(4), 27);
        assert_eq!(grid_size(MAX_TOTAL_LEVEL), 91);
    }

    #[test]
    fn total_level_index_linearizes_and_clamps() {
        assert_eq!(total_level_index(1, 1), 1);
        assert_eq!(total_level_index(3, 5), 25);
        assert_eq!(total_level_index(10, 10), 100);
        assert_eq!(total_level_index(0, 0), 1);
        assert_eq!(total_level_index(1, 0), 1);
        assert_eq!(total_level_index(12, 4), 100);
        assert_eq!(total_level_index(u32::MAX, u32::MAX), 100);
    }

    #[test]
    fn algorithm_rotates_by_realm_only() {
        assert_eq!(Algorithm::for_realm(1), Algorithm::Backtracker);
        assert_eq!(Algorithm::for_realm(3), Algorithm::Kruskal);
        assert_eq!(Algorithm::for_realm(9), Algorithm::RecursiveDivision);
        assert_eq!(Algorithm::for_realm(10), Algorithm::BacktrackerSparse);
        assert_eq!(Algorithm::for_realm(11), Algorithm::Backtracker);
        assert_eq!(Algorithm::for_realm(0), Algorithm::Backtracker);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert!("maze".parse::<Algorithm>().is_err());
    }

    #[test]
    fn serde_names_match_display_names() {
        for algorithm in Algorithm::ALL {
            let json = serde_json::to_string(&algorithm).expect("algorithm should serialize");
            assert_eq!(json, format!("\"{algorithm}\""));
        }
    }
}
