//! Recursive division: open interior split by single-doorway walls.
//!
//! Regions always have odd bounds, so walls land on even lines and doorways on odd
//! cells. Rooms can stay larger than one cell; the spanning-tree property is not enforced.

use crate::types::{CellKind, Pos};

use super::super::fault::CarveFault;
use super::super::rng::MazeRng;
use super::CarveContext;

#[derive(Clone, Copy, Debug)]
struct Region {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

pub(super) fn carve(context: &mut CarveContext<'_>) -> Result<(), CarveFault> {
    context.grid.open_interior();
    let last = context.grid.size() as i32 - 2;
    divide(context, Region { x1: 1, y1: 1, x2: last, y2: last })?;

    context.grid.carve(context.start)?;
    context.grid.carve(context.goal)
}

fn divide(context: &mut CarveContext<'_>, region: Region) -> Result<(), CarveFault> {
    context.budget.spend()?;
    let width = region.x2 - region.x1;
    let height = region.y2 - region.y1;
    if width < 2 || height < 2 {
        return Ok(());
    }

    let vertical = if width == height { context.rng.next_f64() > 0.5 } else { width > height };
    if vertical {
        let wall_x = region.x1 + 1 + 2 * wall_offset(context.rng, width);
        for y in region.y1..=region.y2 {
            context.grid.set(Pos::new(wall_x, y), CellKind::Wall)?;
        }
        let door_y = region.y1 + 2 * context.rng.int_below((height / 2 + 1) as usize) as i32;
        context.grid.carve(Pos::new(wall_x, door_y))?;

        divide(context, Region { x2: wall_x - 1, ..region })?;
        divide(context, Region { x1: wall_x + 1, ..region })
    } else {
        let wall_y = region.y1 + 1 + 2 * wall_offset(context.rng, height);
        for x in region.x1..=region.x2 {
            context.grid.set(Pos::new(x, wall_y), CellKind::Wall)?;
        }
        let door_x = region.x1 + 2 * context.rng.int_below((width / 2 + 1) as usize) as i32;
        context.grid.carve(Pos::new(door_x, wall_y))?;

        divide(context, Region { y2: wall_y - 1, ..region })?;
        divide(context, Region { y1: wall_y + 1, ..region })
    }
}

/// Wall line index across a span: `floor(draw * (span - 1) / 2)`, at most `span / 2 - 1`.
fn wall_offset(rng: &mut MazeRng, span: i32) -> i32 {
    (rng.next_f64() * (f64::from(span - 1) / 2.0)) as i32
}
