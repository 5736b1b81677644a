//! Growing-tree variants that differ only in which active room they extend.

use super::super::fault::CarveFault;
use super::super::grid::ROOM_STEPS;
use super::super::rng::MazeRng;
use super::CarveContext;

/// Probability of extending the newest active room in the long-rooms variant.
const NEWEST_ROOM_BIAS: f64 = 0.85;

/// Mostly newest-first: long corridors with occasional branching.
pub(super) fn carve_long_rooms(context: &mut CarveContext<'_>) -> Result<(), CarveFault> {
    grow(context, |rng, active_len| {
        if rng.next_f64() < NEWEST_ROOM_BIAS { active_len - 1 } else { rng.int_below(active_len) }
    })
}

/// Uniform selection: bushy layout with many short dead ends.
pub(super) fn carve_short(context: &mut CarveContext<'_>) -> Result<(), CarveFault> {
    grow(context, |rng, active_len| rng.int_below(active_len))
}

fn grow(
    context: &mut CarveContext<'_>,
    mut select: impl FnMut(&mut MazeRng, usize) -> usize,
) -> Result<(), CarveFault> {
    let mut active = vec![context.start];
    while !active.is_empty() {
        context.budget.spend()?;
        let index = select(&mut *context.rng, active.len());
        let room = active[index];

        let mut steps = ROOM_STEPS;
        context.rng.shuffle(&mut steps);
        let neighbors = context.grid.uncarved_neighbors(room, &steps);
        match context.rng.pick(&neighbors) {
            Some(&passage) => {
                passage.open(context.grid)?;
                active.push(passage.room);
            }
            None => {
                active.remove(index);
            }
        }
    }
    Ok(())
}
