use log::debug;
use rand::{seq::SliceRandom as _, thread_rng, Rng as _, SeedableRng as _};
use smallvec::SmallVec;

use super::Random;
use crate::dims::Dims;
use crate::maze::{Board, CellWall, Maze, MazeError};
use crate::render::RenderSink;

/// Randomized recursive-backtracking maze generator.
///
/// Carves a spanning tree of open passages over the whole board, so any two
/// cells are connected by exactly one path, then opens one entrance and one
/// exit wall on the boundary.
#[derive(Debug)]
pub struct RecursiveBacktracker;

impl RecursiveBacktracker {
    /// Generates a maze of the given size. The entrance is the left wall of
    /// the top-left cell, the exit the right wall of the bottom-right cell.
    ///
    /// A fixed `seed` yields a bit-identical maze on every run; with `None`
    /// a fresh seed is drawn from the thread RNG.
    pub fn generate(
        size: Dims,
        seed: Option<u64>,
        sink: &mut dyn RenderSink,
    ) -> Result<Maze, MazeError> {
        let mut board = Board::new(size)?;

        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = Random::seed_from_u64(seed);
        debug!("generating {}x{} maze, seed {}", size.0, size.1, seed);

        let start = Dims::ZERO;
        let end = size - Dims::ONE;

        board.break_boundary(start, CellWall::Left)?;
        sink.cell_changed(start);
        board.break_boundary(end, CellWall::Right)?;
        sink.cell_changed(end);

        Self::carve(&mut board, start, &mut rng, sink);

        board.reset_visited();

        Ok(Maze { board, start, end })
    }

    /// Carves the spanning tree in place, rooted at `start`, with a
    /// caller-owned RNG. Every cell ends up visited; callers reset the flags
    /// before solving.
    ///
    /// Explicit-stack rendition of the recursive walk: pop the current cell,
    /// recompute its unvisited neighbors, and either retire the branch or
    /// push the cell back, open a uniformly chosen wall and descend. One RNG
    /// draw per selection keeps the sequence seed-determined.
    pub fn carve(board: &mut Board, start: Dims, rng: &mut Random, sink: &mut dyn RenderSink) {
        let mut stack = Vec::with_capacity(board.cell_count());

        board.set_visited(start, true);
        sink.cell_changed(start);
        stack.push(start);

        while let Some(current) = stack.pop() {
            let unvisited = board
                .neighbor_positions(current)
                .into_iter()
                .filter(|&pos| !board.is_visited(pos))
                .collect::<SmallVec<[_; 4]>>();

            if let Some(&next) = unvisited.choose(rng) {
                stack.push(current);

                let wall = Board::wall_between(current, next).unwrap();
                board.open_passage(current, wall).unwrap();
                board.set_visited(next, true);
                sink.cell_changed(current);
                sink.cell_changed(next);

                stack.push(next);
            }
        }
    }
}
