//! Kruskal: shuffled room-adjacency edges merged through union-find.

use crate::types::Pos;

use super::super::disjoint_set::DisjointSet;
use super::super::fault::CarveFault;
use super::{CarveContext, room_slot};

#[derive(Clone, Copy, Debug)]
struct Edge {
    a: Pos,
    b: Pos,
}

pub(super) fn carve(context: &mut CarveContext<'_>) -> Result<(), CarveFault> {
    let rooms: Vec<Pos> = context.grid.room_positions().collect();
    for &room in &rooms {
        context.grid.carve(room)?;
    }

    let mut edges = Vec::with_capacity(rooms.len() * 2);
    for &room in &rooms {
        for next in [room.offset(2, 0), room.offset(0, 2)] {
            if context.grid.is_interior(next) {
                edges.push(Edge { a: room, b: next });
            }
        }
    }
    context.rng.shuffle(&mut edges);

    let mut sets = DisjointSet::new(rooms.len());
    for edge in edges {
        context.budget.spend()?;
        let a = room_slot(context.grid, edge.a);
        let b = room_slot(context.grid, edge.b);
        if sets.union(a, b) {
            context.grid.carve(edge.a.midpoint(edge.b))?;
        }
    }
    Ok(())
}
