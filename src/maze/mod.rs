pub mod board;
pub mod cell;

pub use board::Board;
pub use cell::{Cell, CellWall};

use thiserror::Error;

use crate::dims::Dims;
use crate::render::RenderSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze size {0:?}, both dimensions must be positive")]
    InvalidSize(Dims),
    #[error("cell {0:?} is out of bounds")]
    OutOfBounds(Dims),
    #[error("cell {0:?} has no neighbor behind its {1:?} wall")]
    NotAdjacent(Dims, CellWall),
    #[error("the {1:?} wall of cell {0:?} does not face the outside of the board")]
    NotBoundary(Dims, CellWall),
}

/// A generated maze: the carved board plus its entrance and exit cells.
#[derive(Debug, Clone)]
pub struct Maze {
    pub board: Board,
    pub start: Dims,
    pub end: Dims,
}

impl Maze {
    /// Finds the path from the entrance to the exit. See
    /// [`DfsSolver::solve`](crate::algorithms::DfsSolver::solve).
    pub fn solve(&mut self, sink: &mut dyn RenderSink) -> Option<Vec<Dims>> {
        crate::algorithms::DfsSolver::solve(&mut self.board, self.start, self.end, sink)
    }

    pub fn size(&self) -> Dims {
        self.board.size()
    }
}
