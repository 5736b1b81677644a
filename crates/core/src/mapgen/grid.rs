//! Square cell buffer shared by every carving algorithm.

use serde::{Serialize, Serializer};

use crate::types::{CellKind, Pos};

use super::fault::CarveFault;

/// Offsets to the four rooms two steps away: up, right, down, left.
pub(super) const ROOM_STEPS: [(i32, i32); 4] = [(0, -2), (2, 0), (0, 2), (-2, 0)];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// `size` x `size` grid of walls.
    pub fn filled(size: usize) -> Self {
        Self { size, cells: vec![CellKind::Wall; size * size] }
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }

    /// Strictly inside the border ring.
    pub fn is_interior(&self, pos: Pos) -> bool {
        let last = self.size.saturating_sub(1);
        pos.x > 0 && pos.y > 0 && (pos.x as usize) < last && (pos.y as usize) < last
    }

    /// Cell at `pos`; anything outside the grid reads as wall.
    pub fn cell(&self, pos: Pos) -> CellKind {
        self.index(pos).map_or(CellKind::Wall, |index| self.cells[index])
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.cell(pos) == CellKind::Wall
    }

    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Odd-odd coordinates inside the border, row-major.
    pub fn room_positions(&self) -> impl Iterator<Item = Pos> {
        let last = self.size.saturating_sub(1) as i32;
        (1..last)
            .step_by(2)
            .flat_map(move |y| (1..last).step_by(2).map(move |x| Pos::new(x, y)))
    }

    pub fn room_count(&self) -> usize {
        let per_axis = self.size.saturating_sub(1) / 2;
        per_axis * per_axis
    }

    pub(crate) fn set(&mut self, pos: Pos, kind: CellKind) -> Result<(), CarveFault> {
        let index = self.index(pos).ok_or(CarveFault::OutOfBounds { pos })?;
        self.cells[index] = kind;
        Ok(())
    }

    pub(crate) fn carve(&mut self, pos: Pos) -> Result<(), CarveFault> {
        self.set(pos, CellKind::Path)
    }

    pub(crate) fn reset(&mut self) {
        self.cells.fill(CellKind::Wall);
    }

    pub(crate) fn open_interior(&mut self) {
        let size = self.size;
        for y in 1..size.saturating_sub(1) {
            self.cells[y * size + 1..(y + 1) * size - 1].fill(CellKind::Path);
        }
    }

    pub(crate) fn seal_border(&mut self) {
        let size = self.size;
        if size == 0 {
            return;
        }
        for i in 0..size {
            self.cells[i] = CellKind::Wall;
            self.cells[(size - 1) * size + i] = CellKind::Wall;
            self.cells[i * size] = CellKind::Wall;
            self.cells[i * size + size - 1] = CellKind::Wall;
        }
    }

    /// Interior rooms two steps from `room` that are still walled.
    pub(super) fn uncarved_neighbors(&self, room: Pos, steps: &[(i32, i32)]) -> Vec<Passage> {
        self.neighbor_passages(room, steps, true)
    }

    /// Interior rooms two steps from `room` that are already open.
    pub(super) fn carved_neighbors(&self, room: Pos, steps: &[(i32, i32)]) -> Vec<Passage> {
        self.neighbor_passages(room, steps, false)
    }

    fn neighbor_passages(&self, room: Pos, steps: &[(i32, i32)], want_wall: bool) -> Vec<Passage> {
        steps
            .iter()
            .map(|&(dx, dy)| room.offset(dx, dy))
            .filter(|&next| self.is_interior(next) && self.is_wall(next) == want_wall)
            .map(|next| Passage { room: next, between: room.midpoint(next) })
            .collect()
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos).then(|| (pos.y as usize) * self.size + (pos.x as usize))
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

/// A neighbor room and the between-cell that joins it to the current room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Passage {
    pub(super) room: Pos,
    pub(super) between: Pos,
}

impl Passage {
    pub(super) fn open(self, grid: &mut Grid) -> Result<(), CarveFault> {
        grid.carve(self.between)?;
        grid.carve(self.room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_wall() {
        let grid = Grid::filled(5);
        assert!(grid.cells().iter().all(|&cell| cell == CellKind::Wall));
        assert_eq!(grid.rows().count(), 5);
    }

    #[test]
    fn out_of_range_reads_as_wall_and_rejects_carving() {
        let mut grid = Grid::filled(5);
        assert_eq!(grid.cell(Pos::new(-1, 2)), CellKind::Wall);
        assert_eq!(grid.cell(Pos::new(5, 0)), CellKind::Wall);
        let outside = Pos::new(5, 5);
        assert_eq!(grid.carve(outside), Err(CarveFault::OutOfBounds { pos: outside }));
    }

    #[test]
    fn room_positions_cover_every_odd_odd_interior_cell() {
        let grid = Grid::filled(25);
        let rooms: Vec<_> = grid.room_positions().collect();
        assert_eq!(rooms.len(), grid.room_count());
        assert_eq!(rooms.len(), 144);
        assert_eq!(rooms.first(), Some(&Pos::new(1, 1)));
        assert_eq!(rooms.last(), Some(&Pos::new(23, 23)));
        assert!(rooms.iter().all(|room| room.is_room()));
    }

    #[test]
    fn seal_border_restores_the_outer_ring() {
        let mut grid = Grid::filled(7);
        grid.open_interior();
        grid.carve(Pos::new(0, 3)).expect("border cell is in bounds");
        grid.carve(Pos::new(6, 6)).expect("corner cell is in bounds");
        grid.seal_border();
        for i in 0..7 {
            assert!(grid.is_wall(Pos::new(i, 0)));
            assert!(grid.is_wall(Pos::new(i, 6)));
            assert!(grid.is_wall(Pos::new(0, i)));
            assert!(grid.is_wall(Pos::new(6, i)));
        }
        assert_eq!(grid.cell(Pos::new(3, 3)), CellKind::Path);
    }

    #[test]
    fn neighbor_passages_stay_inside_the_border() {
        let mut grid = Grid::filled(7);
        let corner = Pos::new(1, 1);
        let uncarved = grid.uncarved_neighbors(corner, &ROOM_STEPS);
        assert_eq!(
            uncarved,
            vec![
                Passage { room: Pos::new(3, 1), between: Pos::new(2, 1) },
                Passage { room: Pos::new(1, 3), between: Pos::new(1, 2) },
            ]
        );

        uncarved[0].open(&mut grid).expect("passage is in bounds");
        assert_eq!(grid.carved_neighbors(corner, &ROOM_STEPS).len(), 1);
        assert_eq!(grid.uncarved_neighbors(corner, &ROOM_STEPS).len(), 1);
    }

    #[test]
    fn grid_serializes_as_rows_of_codes() {
        let mut grid = Grid::filled(3);
        grid.carve(Pos::new(1, 1)).expect("center is in bounds");
        let json = serde_json::to_string(&grid).expect("grid should serialize");
        assert_eq!(json, "[[1,1,1],[1,0,1],[1,1,1]]");
    }
}
