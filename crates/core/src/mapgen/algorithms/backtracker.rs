//! Depth-first backtracker: long winding corridors.

use super::super::fault::CarveFault;
use super::super::grid::ROOM_STEPS;
use super::CarveContext;

pub(super) fn carve(context: &mut CarveContext<'_>) -> Result<(), CarveFault> {
    let mut stack = vec![context.start];
    while let Some(&room) = stack.last() {
        context.budget.spend()?;
        let mut steps = ROOM_STEPS;
        context.rng.shuffle(&mut steps);
        let neighbors = context.grid.uncarved_neighbors(room, &steps);
        match context.rng.pick(&neighbors) {
            Some(&passage) => {
                passage.open(context.grid)?;
                stack.push(passage.room);
            }
            None => {
                stack.pop();
            }
        }
    }
    Ok(())
}
