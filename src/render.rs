use crate::dims::Dims;

/// Notification boundary toward a presentation layer.
///
/// The generator reports every wall and visited-flag mutation through
/// [`cell_changed`](RenderSink::cell_changed); the solver additionally
/// reports each forward and undone move through [`step`](RenderSink::step).
/// A sink carries no board-affecting behavior: the final board state and the
/// found path are the same whether or not anything listens.
pub trait RenderSink {
    fn cell_changed(&mut self, pos: Dims) {
        let _ = pos;
    }

    fn step(&mut self, from: Dims, to: Dims, undo: bool) {
        let _ = (from, to, undo);
    }
}

/// Sink that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRender;

impl RenderSink for NoopRender {}
