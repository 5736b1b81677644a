//! Hunt-and-kill: random walk until stuck, then hunt for an uncarved room beside the maze.

use crate::types::Pos;

use super::super::fault::CarveFault;
use super::super::grid::ROOM_STEPS;
use super::CarveContext;

pub(super) fn carve(context: &mut CarveContext<'_>) -> Result<(), CarveFault> {
    let mut current = context.start;
    loop {
        context.budget.spend()?;
        let neighbors = context.grid.uncarved_neighbors(current, &ROOM_STEPS);
        if let Some(&passage) = context.rng.pick(&neighbors) {
            passage.open(context.grid)?;
            current = passage.room;
            continue;
        }

        match hunt(context)? {
            Some(room) => current = room,
            None => return Ok(()),
        }
    }
}

/// Joins the first row-major uncarved room that touches the maze; `None` once every room is carved.
fn hunt(context: &mut CarveContext<'_>) -> Result<Option<Pos>, CarveFault> {
    let grid = &*context.grid;
    let found = grid.room_positions().find_map(|room| {
        if !grid.is_wall(room) {
            return None;
        }
        let carved = grid.carved_neighbors(room, &ROOM_STEPS);
        (!carved.is_empty()).then_some((room, carved))
    });
    let Some((room, carved)) = found else {
        return Ok(None);
    };
    let Some(&link) = context.rng.pick(&carved) else {
        return Ok(None);
    };

    context.grid.carve(link.between)?;
    context.grid.carve(room)?;
    Ok(Some(room))
}
