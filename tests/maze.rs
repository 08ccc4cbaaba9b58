use pmaze::algorithms::{DfsSolver, RecursiveBacktracker};
use pmaze::dims::Dims;
use pmaze::maze::{Board, CellWall, Maze};
use pmaze::render::{NoopRender, RenderSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    CellChanged(Dims),
    Step { from: Dims, to: Dims, undo: bool },
}

#[derive(Default)]
struct RecordingSink {
    events: Vec<Event>,
}

impl RenderSink for RecordingSink {
    fn cell_changed(&mut self, pos: Dims) {
        self.events.push(Event::CellChanged(pos));
    }

    fn step(&mut self, from: Dims, to: Dims, undo: bool) {
        self.events.push(Event::Step { from, to, undo });
    }
}

fn generate(size: Dims, seed: u64) -> Maze {
    RecursiveBacktracker::generate(size, Some(seed), &mut NoopRender).unwrap()
}

/// Cells reachable from `from` by walking open passages.
fn reachable_count(board: &Board, from: Dims) -> usize {
    let mut seen = vec![from];
    let mut stack = vec![from];
    while let Some(pos) = stack.pop() {
        for wall in CellWall::get_in_order() {
            if board.get_cell(pos).unwrap().has_wall(wall) {
                continue;
            }
            let Some(next) = board.neighbor(pos, wall) else {
                continue;
            };
            if !seen.contains(&next) {
                seen.push(next);
                stack.push(next);
            }
        }
    }
    seen.len()
}

#[test]
fn every_cell_is_reachable_from_the_entrance() {
    for seed in [0, 1, 7, 1234] {
        let maze = generate(Dims(10, 8), seed);
        assert_eq!(
            reachable_count(&maze.board, maze.start),
            maze.board.cell_count()
        );
    }
}

#[test]
fn generated_maze_is_a_spanning_tree() {
    // Connected with cell_count - 1 internal passages, hence acyclic.
    let maze = generate(Dims(12, 9), 77);
    let mut open = 0;
    for pos in maze.board.iter_pos() {
        for wall in [CellWall::Right, CellWall::Bottom] {
            if maze.board.neighbor(pos, wall).is_some()
                && maze.board.get_cell(pos).unwrap().is_open(wall)
            {
                open += 1;
            }
        }
    }
    assert_eq!(open, maze.board.cell_count() - 1);
    assert_eq!(
        reachable_count(&maze.board, maze.start),
        maze.board.cell_count()
    );
}

#[test]
fn generation_is_deterministic_per_seed() {
    let first = generate(Dims(15, 11), 4242);
    let second = generate(Dims(15, 11), 4242);
    assert_eq!(first.board, second.board);
}

#[test]
fn sink_presence_does_not_change_the_maze() {
    let mut recording = RecordingSink::default();
    let watched = RecursiveBacktracker::generate(Dims(6, 6), Some(3), &mut recording).unwrap();
    let silent = generate(Dims(6, 6), 3);
    assert_eq!(watched.board, silent.board);
    assert!(!recording.events.is_empty());
}

#[test]
fn generation_reports_entrance_and_exit_first() {
    let mut recording = RecordingSink::default();
    let maze = RecursiveBacktracker::generate(Dims(4, 4), Some(9), &mut recording).unwrap();
    assert_eq!(recording.events[0], Event::CellChanged(maze.start));
    assert_eq!(recording.events[1], Event::CellChanged(maze.end));
    assert!(recording
        .events
        .iter()
        .all(|event| matches!(event, Event::CellChanged(_))));
}

#[test]
fn solver_reports_the_start_cell_before_anything_else() {
    let mut maze = generate(Dims(5, 5), 31);
    let mut recording = RecordingSink::default();
    maze.solve(&mut recording).unwrap();
    assert_eq!(recording.events[0], Event::CellChanged(maze.start));
}

#[test]
fn solver_events_replay_to_the_returned_path() {
    let mut maze = generate(Dims(9, 9), 2024);
    let mut recording = RecordingSink::default();
    let path = maze.solve(&mut recording).unwrap();

    // Forward steps push, undo steps pop; visits always name the cell the
    // walk currently stands on. What remains at the end is the found path.
    let mut walk = Vec::new();
    for event in &recording.events {
        match *event {
            Event::CellChanged(pos) => {
                if walk.is_empty() {
                    assert_eq!(pos, maze.start);
                    walk.push(pos);
                } else {
                    assert_eq!(Some(&pos), walk.last());
                }
            }
            Event::Step { from, to, undo: false } => {
                assert_eq!(Some(&from), walk.last());
                walk.push(to);
            }
            Event::Step { from, to, undo: true } => {
                assert_eq!(walk.pop(), Some(to));
                assert_eq!(Some(&from), walk.last());
            }
        }
    }
    assert_eq!(walk, path);
}

#[test]
fn solve_between_arbitrary_cells() {
    let mut maze = generate(Dims(8, 8), 64);
    let path = DfsSolver::solve(&mut maze.board, Dims(3, 3), Dims(7, 0), &mut NoopRender)
        .expect("all cells of a perfect maze are connected");
    assert_eq!(path.first(), Some(&Dims(3, 3)));
    assert_eq!(path.last(), Some(&Dims(7, 0)));
}

#[test]
fn one_by_one_maze_is_trivially_solvable() {
    let mut maze = generate(Dims(1, 1), 1);
    let mut recording = RecordingSink::default();
    let path = maze.solve(&mut recording).unwrap();
    assert_eq!(path, vec![Dims(0, 0)]);
    assert!(recording
        .events
        .iter()
        .all(|event| matches!(event, Event::CellChanged(_))));
}
