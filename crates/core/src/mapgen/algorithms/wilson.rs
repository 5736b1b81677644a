//! Wilson: loop-erased random walks from pending rooms into the growing tree.

use crate::types::Pos;

use super::super::fault::CarveFault;
use super::super::grid::ROOM_STEPS;
use super::{CarveContext, room_slot};

pub(super) fn carve(context: &mut CarveContext<'_>) -> Result<(), CarveFault> {
    let room_count = context.grid.room_count();
    let mut in_tree = vec![false; room_count];
    in_tree[room_slot(context.grid, context.start)] = true;

    let start = context.start;
    let mut pending: Vec<Pos> = context.grid.room_positions().filter(|&room| room != start).collect();
    let mut walk_position: Vec<Option<usize>> = vec![None; room_count];

    while !pending.is_empty() {
        let origin = pending[context.rng.int_below(pending.len())];
        let walk = loop_erased_walk(context, origin, &in_tree, &mut walk_position)?;

        context.grid.carve(origin)?;
        for pair in walk.windows(2) {
            context.grid.carve(pair[0].midpoint(pair[1]))?;
            context.grid.carve(pair[1])?;
        }
        for &room in &walk {
            let slot = room_slot(context.grid, room);
            in_tree[slot] = true;
            walk_position[slot] = None;
        }
        pending.retain(|&room| !in_tree[room_slot(context.grid, room)]);
    }
    Ok(())
}

/// Walks from `origin` until it reaches the tree, erasing loops as they close.
/// `walk_position` maps each room on the current path to its index in the path.
fn loop_erased_walk(
    context: &mut CarveContext<'_>,
    origin: Pos,
    in_tree: &[bool],
    walk_position: &mut [Option<usize>],
) -> Result<Vec<Pos>, CarveFault> {
    let mut walk = vec![origin];
    walk_position[room_slot(context.grid, origin)] = Some(0);
    let mut current = origin;

    while !in_tree[room_slot(context.grid, current)] {
        context.budget.spend()?;
        let Some(&(dx, dy)) = context.rng.pick(&ROOM_STEPS) else {
            break;
        };
        let next = current.offset(dx, dy);
        if !context.grid.is_interior(next) {
            continue;
        }

        let next_slot = room_slot(context.grid, next);
        let seen_at = walk_position[next_slot];
        match seen_at {
            Some(first) => {
                for erased in walk.drain(first + 1..) {
                    walk_position[room_slot(context.grid, erased)] = None;
                }
            }
            None => {
                walk_position[next_slot] = Some(walk.len());
                walk.push(next);
            }
        }
        current = next;
    }
    Ok(walk)
}
