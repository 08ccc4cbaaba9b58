use log::debug;

use crate::dims::Dims;
use crate::maze::{Board, CellWall};
use crate::render::RenderSink;

/// Order in which directions are tried from each cell. Purely a tie-break
/// policy: on a spanning tree there is only one path, but on boards with
/// redundant connectivity it decides which of the valid paths is found.
const TRY_ORDER: [CellWall; 4] = [
    CellWall::Bottom,
    CellWall::Right,
    CellWall::Top,
    CellWall::Left,
];

struct Frame {
    pos: Dims,
    next_wall: usize,
}

/// Depth-first path search over open passages, with backtrack signaling.
#[derive(Debug)]
pub struct DfsSolver;

impl DfsSolver {
    /// Searches a path from `start` to `goal`, respecting walls and visited
    /// flags, and returns it as the list of cells from `start` to `goal`.
    ///
    /// Cells are marked and reported visited in DFS pre-order; every descent
    /// is reported as a forward step and every abandoned descent as an undo
    /// step. `None` means the goal is unreachable, a normal outcome on a
    /// disconnected or pre-visited board. Runs on an explicit frame stack, so
    /// call-stack depth stays flat on large boards.
    pub fn solve(
        board: &mut Board,
        start: Dims,
        goal: Dims,
        sink: &mut dyn RenderSink,
    ) -> Option<Vec<Dims>> {
        if !board.is_in_bounds(start) || !board.is_in_bounds(goal) {
            return None;
        }

        let mut frames = vec![Frame {
            pos: start,
            next_wall: 0,
        }];
        board.set_visited(start, true);
        sink.cell_changed(start);

        loop {
            let Some(frame) = frames.last_mut() else {
                debug!("no path from {:?} to {:?}", start, goal);
                return None;
            };
            let current = frame.pos;

            if current == goal {
                let path: Vec<Dims> = frames.iter().map(|frame| frame.pos).collect();
                debug!("path of {} cells from {:?} to {:?}", path.len(), start, goal);
                return Some(path);
            }

            let mut descend = None;
            while frame.next_wall < TRY_ORDER.len() {
                let wall = TRY_ORDER[frame.next_wall];
                frame.next_wall += 1;

                if board.get_cell(current).unwrap().has_wall(wall) {
                    continue;
                }
                // An open boundary wall (entrance or exit) leads outside.
                let Some(next) = board.neighbor(current, wall) else {
                    continue;
                };
                if board.is_visited(next) {
                    continue;
                }

                descend = Some(next);
                break;
            }

            match descend {
                Some(next) => {
                    sink.step(current, next, false);
                    board.set_visited(next, true);
                    sink.cell_changed(next);
                    frames.push(Frame {
                        pos: next,
                        next_wall: 0,
                    });
                }
                None => {
                    let failed = frames.pop().unwrap().pos;
                    if let Some(parent) = frames.last() {
                        sink.step(parent.pos, failed, true);
                    }
                }
            }
        }
    }
}
