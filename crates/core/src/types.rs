use serde::{Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }

    /// Midpoint between two rooms two steps apart.
    pub const fn midpoint(self, other: Self) -> Self {
        Self { y: (self.y + other.y) / 2, x: (self.x + other.x) / 2 }
    }

    pub const fn is_room(self) -> bool {
        self.x % 2 == 1 && self.y % 2 == 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellKind {
    Path,
    Wall,
    Start,
    Goal,
}

impl CellKind {
    /// Numeric encoding shared with downstream renderers.
    pub const fn code(self) -> u8 {
        match self {
            Self::Path => 0,
            Self::Wall => 1,
            Self::Start => 2,
            Self::Goal => 3,
        }
    }

    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

impl Serialize for CellKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}
