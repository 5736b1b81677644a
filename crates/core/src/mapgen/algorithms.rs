//! Carving algorithms behind one exhaustive dispatch.
//!
//! Every algorithm starts from an all-wall grid with the start room already open and
//! examines rooms two steps away along the four axes; the cell between is the passage.

mod aldous_broder;
mod backtracker;
mod growing_tree;
mod hunt_and_kill;
mod kruskal;
mod prim;
mod recursive_division;
mod wilson;

use crate::types::Pos;

use super::fault::{CarveFault, StepBudget};
use super::grid::Grid;
use super::progression::Algorithm;
use super::rng::MazeRng;

pub(super) struct CarveContext<'a> {
    pub(super) grid: &'a mut Grid,
    pub(super) rng: &'a mut MazeRng,
    pub(super) budget: StepBudget,
    pub(super) start: Pos,
    pub(super) goal: Pos,
}

pub(super) fn run(algorithm: Algorithm, context: &mut CarveContext<'_>) -> Result<(), CarveFault> {
    context.grid.carve(context.start)?;
    match algorithm {
        Algorithm::Backtracker | Algorithm::BacktrackerSparse => backtracker::carve(context),
        Algorithm::Prim => prim::carve(context),
        Algorithm::Kruskal => kruskal::carve(context),
        Algorithm::HuntAndKill => hunt_and_kill::carve(context),
        Algorithm::AldousBroder => aldous_broder::carve(context),
        Algorithm::Wilson => wilson::carve(context),
        Algorithm::GrowingTreeLongRooms => growing_tree::carve_long_rooms(context),
        Algorithm::GrowingTreeShort => growing_tree::carve_short(context),
        Algorithm::RecursiveDivision => recursive_division::carve(context),
    }
}

/// Dense index of an odd-odd room for per-room bookkeeping arrays.
fn room_slot(grid: &Grid, room: Pos) -> usize {
    let per_axis = grid.size().saturating_sub(1) / 2;
    ((room.y as usize - 1) / 2) * per_axis + (room.x as usize - 1) / 2
}
