//! Structural diagnostics over a carved grid: room connectivity and walkable reachability.
//!
//! Generation never consults these; tests and the fuzz harness use them to check
//! the guarantees each algorithm makes.

use std::collections::VecDeque;

use crate::mapgen::Grid;
use crate::mapgen::disjoint_set::DisjointSet;
use crate::types::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomGraph {
    pub rooms: usize,
    /// Open between-cells joining two walkable rooms.
    pub connections: usize,
    /// Connected components over all rooms; walled rooms count as their own component.
    pub components: usize,
}

impl RoomGraph {
    pub fn analyze(grid: &Grid) -> Self {
        let rooms: Vec<Pos> = grid.room_positions().collect();
        let per_axis = grid.size().saturating_sub(1) / 2;
        let slot = |room: Pos| ((room.y as usize - 1) / 2) * per_axis + (room.x as usize - 1) / 2;

        let mut sets = DisjointSet::new(rooms.len());
        let mut connections = 0;
        for &room in &rooms {
            if !grid.cell(room).is_walkable() {
                continue;
            }
            for next in [room.offset(2, 0), room.offset(0, 2)] {
                if !grid.is_interior(next) || !grid.cell(next).is_walkable() {
                    continue;
                }
                if grid.cell(room.midpoint(next)).is_walkable() {
                    connections += 1;
                    sets.union(slot(room), slot(next));
                }
            }
        }

        Self { rooms: rooms.len(), connections, components: sets.set_count() }
    }

    /// Connected with exactly `rooms - 1` connections: a spanning tree.
    pub const fn is_perfect(&self) -> bool {
        self.rooms > 0 && self.components == 1 && self.connections + 1 == self.rooms
    }
}

/// True when every walkable cell is 4-connected to every other one.
pub fn walkable_cells_connected(grid: &Grid) -> bool {
    let size = grid.size();
    let walkable: Vec<Pos> = (0..size as i32)
        .flat_map(|y| (0..size as i32).map(move |x| Pos::new(x, y)))
        .filter(|&pos| grid.cell(pos).is_walkable())
        .collect();
    let Some(&first) = walkable.first() else {
        return true;
    };

    let mut seen = vec![false; size * size];
    let index = |pos: Pos| (pos.y as usize) * size + (pos.x as usize);
    seen[index(first)] = true;
    let mut open = VecDeque::from([first]);
    let mut reached = 1;
    while let Some(pos) = open.pop_front() {
        for next in [pos.offset(0, -1), pos.offset(1, 0), pos.offset(0, 1), pos.offset(-1, 0)] {
            if !grid.cell(next).is_walkable() || seen[index(next)] {
                continue;
            }
            seen[index(next)] = true;
            reached += 1;
            open.push_back(next);
        }
    }
    reached == walkable.len()
}
