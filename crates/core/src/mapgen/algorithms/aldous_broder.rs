//! Aldous-Broder: unrestricted random walk; uniform spanning trees at a higher step cost.

use super::super::fault::CarveFault;
use super::super::grid::{Passage, ROOM_STEPS};
use super::CarveContext;

pub(super) fn carve(context: &mut CarveContext<'_>) -> Result<(), CarveFault> {
    let total_rooms = context.grid.room_count();
    let mut visited = 1;
    let mut current = context.start;

    while visited < total_rooms {
        context.budget.spend()?;
        let Some(&(dx, dy)) = context.rng.pick(&ROOM_STEPS) else {
            break;
        };
        let next = current.offset(dx, dy);
        if !context.grid.is_interior(next) {
            continue;
        }
        if context.grid.is_wall(next) {
            Passage { room: next, between: current.midpoint(next) }.open(context.grid)?;
            visited += 1;
        }
        current = next;
    }
    Ok(())
}
