use self::CellWall::*;
use crate::dims::Dims;

/// A single board cell. Starts fully walled and unvisited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    left: bool,
    top: bool,
    right: bool,
    bottom: bool,
    visited: bool,
}

impl Cell {
    pub fn new() -> Cell {
        Cell {
            left: true,
            top: true,
            right: true,
            bottom: true,
            visited: false,
        }
    }

    pub fn remove_wall(&mut self, wall: CellWall) {
        match wall {
            Left => self.left = false,
            Top => self.top = false,
            Right => self.right = false,
            Bottom => self.bottom = false,
        }
    }

    pub fn has_wall(&self, wall: CellWall) -> bool {
        match wall {
            Left => self.left,
            Top => self.top,
            Right => self.right,
            Bottom => self.bottom,
        }
    }

    pub fn is_open(&self, wall: CellWall) -> bool {
        !self.has_wall(wall)
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    Left,
    Right,
    Top,
    Bottom,
}

impl CellWall {
    pub fn to_coord(self) -> Dims {
        match self {
            Left => Dims(-1, 0),
            Right => Dims(1, 0),
            Top => Dims(0, -1),
            Bottom => Dims(0, 1),
        }
    }

    pub fn reverse_wall(self) -> CellWall {
        match self {
            Left => Right,
            Right => Left,
            Top => Bottom,
            Bottom => Top,
        }
    }

    pub fn get_in_order() -> [CellWall; 4] {
        [Left, Right, Top, Bottom]
    }
}
