use tracing::debug;

use crate::board::Board;
use crate::dot::DotId;
use crate::location::Location;

/// A hint: the first dot pair, in ascending id order, whose path is not yet complete,
/// and the endpoint the caller should highlight.
///
/// The ascending-id tie-break is arbitrary but deterministic, kept for reproducibility.
// TODO: consider a fewest-remaining-legal-moves heuristic behind the same signature
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Hint {
    /// The incomplete dot pair to work on.
    pub dot: DotId,
    /// That pair's designated end cell.
    pub target: Location,
}

/// Sequences a continuous drag gesture into [`Board`] commands.
///
/// The input layer translates gesture samples into cell locations and drives the
/// stroke protocol: [`begin_stroke`](Self::begin_stroke) once,
/// [`continue_stroke`](Self::continue_stroke) per cell entered,
/// [`end_stroke`](Self::end_stroke) on release. One stroke is in flight at a time;
/// callers end a stroke before beginning the next. Everything here is synchronous and
/// single-threaded; commands complete before returning and there is no background
/// work.
///
/// Successful mutations bump a version counter so a presentation layer can compare
/// versions instead of diffing board state to decide whether to redraw.
pub struct Session {
    board: Board,
    active: Option<DotId>,
    version: u64,
}

impl Session {
    /// Start a session over a freshly built board.
    pub fn new(board: Board) -> Self {
        Self { board, active: None, version: 0 }
    }

    /// Read-only view of the underlying board, sufficient for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Monotonic counter of successful mutations since the session began.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The dot pair the in-flight stroke is drawing, if any.
    pub fn active_dot(&self) -> Option<DotId> {
        self.active
    }

    /// Begin a stroke at `pos`. Returns whether a stroke actually started.
    ///
    /// On a dot endpoint (start or end), that pair's path is reset and the pair becomes
    /// active. On a non-dot cell covered by a path, the path is cut back to `pos` and
    /// its pair becomes active, which is how the player re-grabs a drawn line
    /// mid-course and redraws from there. Grabbing the current tip cuts nothing but
    /// still activates the pair. Anywhere else, nothing happens.
    pub fn begin_stroke(&mut self, pos: Location) -> bool {
        if let Some(dot) = self.board.dot_at(pos).map(|info| info.id()) {
            self.board.reset_path(dot);
            self.active = Some(dot);
            self.version += 1;
            debug!(dot, ?pos, "stroke began at dot");
            return true;
        }

        if let Some(dot) = self.board.cell_at(pos).and_then(|cell| cell.path()) {
            if self.board.retract_path_to(dot, pos) {
                self.version += 1;
            }
            self.active = Some(dot);
            debug!(dot, ?pos, "stroke began on path");
            return true;
        }

        false
    }

    /// Extend the active stroke to `pos`. Returns whether the move was accepted.
    ///
    /// Calls with no active stroke, and moves [`Board::extend_path`] rejects, are
    /// ignored; state is unchanged either way, and the caller is free to keep
    /// feeding positions.
    pub fn continue_stroke(&mut self, pos: Location) -> bool {
        let Some(dot) = self.active else {
            return false;
        };
        if self.board.extend_path(dot, pos) {
            self.version += 1;
            true
        } else {
            false
        }
    }

    /// End the in-flight stroke, if any, and report whether the level is now solved.
    /// The session makes no completion decision itself; the caller acts on the result
    /// (level advance, celebration, persistence).
    pub fn end_stroke(&mut self) -> bool {
        if self.active.take().is_some() {
            debug!("stroke ended");
        }
        self.board.is_solved()
    }

    /// The hint to offer, or [`None`] once every path is complete.
    ///
    /// Pure query; whether the player may *spend* a hint is the caller's
    /// progress-tracking concern, not board state.
    pub fn request_hint(&self) -> Option<Hint> {
        self.board
            .dots()
            .iter()
            .find(|dot| !self.board.is_path_complete(dot.id()))
            .map(|dot| Hint { dot: dot.id(), target: dot.end() })
    }
}
