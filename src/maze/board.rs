use smallvec::SmallVec;

use crate::array::Array2D;
use crate::dims::Dims;
use crate::maze::cell::{Cell, CellWall};
use crate::maze::MazeError;

/// A rectangular grid of cells. Created fully walled; walls only ever come
/// down through [`Board::open_passage`] and [`Board::break_boundary`], which
/// keep the two flags of a shared wall in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2D<Cell>,
    width: usize,
    height: usize,
}

impl Board {
    pub fn new(size: Dims) -> Result<Board, MazeError> {
        if !size.all_positive() {
            return Err(MazeError::InvalidSize(size));
        }

        let (width, height) = (size.0 as usize, size.1 as usize);
        Ok(Board {
            cells: Array2D::new(Cell::new(), width, height),
            width,
            height,
        })
    }

    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        0 <= pos.0 && pos.0 < self.width as i32 && 0 <= pos.1 && pos.1 < self.height as i32
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn get_cell_mut(&mut self, pos: Dims) -> Option<&mut Cell> {
        self.cells.get_mut(pos)
    }

    /// Position on the other side of `wall`, or `None` when `wall` faces the
    /// outside of the board.
    pub fn neighbor(&self, pos: Dims, wall: CellWall) -> Option<Dims> {
        let other = pos + wall.to_coord();
        (self.is_in_bounds(pos) && self.is_in_bounds(other)).then_some(other)
    }

    /// In-bounds neighbors of `pos`, in fixed [`CellWall::get_in_order`]
    /// order.
    pub fn neighbor_positions(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        CellWall::get_in_order()
            .into_iter()
            .filter_map(|wall| self.neighbor(pos, wall))
            .collect()
    }

    /// The wall of `cell` that faces `cell2`, if the two are adjacent.
    pub fn wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        match (cell.0 - cell2.0, cell.1 - cell2.1) {
            (-1, 0) => Some(CellWall::Right),
            (1, 0) => Some(CellWall::Left),
            (0, -1) => Some(CellWall::Bottom),
            (0, 1) => Some(CellWall::Top),
            _ => None,
        }
    }

    /// Opens the wall between `pos` and its neighbor behind `wall`, updating
    /// both cells in one step.
    pub fn open_passage(&mut self, pos: Dims, wall: CellWall) -> Result<(), MazeError> {
        if !self.is_in_bounds(pos) {
            return Err(MazeError::OutOfBounds(pos));
        }
        let other = self
            .neighbor(pos, wall)
            .ok_or(MazeError::NotAdjacent(pos, wall))?;

        self.cells[pos].remove_wall(wall);
        self.cells[other].remove_wall(wall.reverse_wall());
        Ok(())
    }

    /// Opens a wall that faces the outside of the board, for the entrance and
    /// exit. Rejects walls with an interior neighbor.
    pub fn break_boundary(&mut self, pos: Dims, wall: CellWall) -> Result<(), MazeError> {
        if !self.is_in_bounds(pos) {
            return Err(MazeError::OutOfBounds(pos));
        }
        if self.neighbor(pos, wall).is_some() {
            return Err(MazeError::NotBoundary(pos, wall));
        }

        self.cells[pos].remove_wall(wall);
        Ok(())
    }

    pub fn set_visited(&mut self, pos: Dims, visited: bool) {
        self.cells[pos].set_visited(visited);
    }

    pub fn is_visited(&self, pos: Dims) -> bool {
        self.cells[pos].visited()
    }

    /// Clears every visited flag. Called between the generation and solving
    /// phases so neither sees the other's marks.
    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_visited(false);
        }
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        self.cells.iter_pos()
    }

    pub fn get_cells(&self) -> &Array2D<Cell> {
        &self.cells
    }
}
