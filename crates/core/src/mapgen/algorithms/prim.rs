//! Randomized Prim: grows the carved region from a uniformly random frontier entry.

use super::super::fault::CarveFault;
use super::super::grid::ROOM_STEPS;
use super::CarveContext;

pub(super) fn carve(context: &mut CarveContext<'_>) -> Result<(), CarveFault> {
    let mut frontier = context.grid.uncarved_neighbors(context.start, &ROOM_STEPS);
    while !frontier.is_empty() {
        context.budget.spend()?;
        let entry = frontier.remove(context.rng.int_below(frontier.len()));
        // Several frontier entries can target the same room; only the first one wins.
        if !context.grid.is_wall(entry.room) {
            continue;
        }
        entry.open(context.grid)?;
        frontier.extend(context.grid.uncarved_neighbors(entry.room, &ROOM_STEPS));
    }
    Ok(())
}
