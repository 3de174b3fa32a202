use std::fmt::{Display, Formatter, Write};

use ndarray::Array2;
use tracing::trace;

use crate::cell::Cell;
use crate::dot::{Dot, DotId};
use crate::location::{Dimension, Location};
use crate::path::Path;
use crate::step::Step;

/// The full mutable grid-state object for one level attempt.
///
/// A board owns its cells, dots, and paths exclusively; all occupancy changes go through
/// [`extend_path`](Self::extend_path), [`retract_path_to`](Self::retract_path_to), and
/// [`reset_path`](Self::reset_path), which validate first and mutate only on success.
/// Rejected moves return `false` and leave the board exactly as it was; an illegal drag
/// is ordinary play, not a fault. The same rejected command fails again deterministically
/// if re-issued.
///
/// [`Board`]s should be built using a [`BoardBuilder`](crate::BoardBuilder) or
/// converted from a [`Level`](crate::Level) descriptor. Discard the board and
/// build a fresh one to restart or change levels; there is no in-place rebuild.
pub struct Board {
    pub(crate) cells: Array2<Cell>,
    // both indexed by DotId
    pub(crate) dots: Vec<Dot>,
    pub(crate) paths: Vec<Path>,
    // width, height
    pub(crate) dims: (Dimension, Dimension),
}

impl Board {
    /// Board dimensions, in `(width, height)` order.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// The cell at `pos`, or [`None`] out of bounds.
    pub fn cell_at(&self, pos: Location) -> Option<&Cell> {
        self.cells.get(pos.as_index())
    }

    /// Every cell with its location, row-major. Together with [`dots`](Self::dots) and
    /// [`paths`](Self::paths) this is the whole render snapshot; no pixel geometry is
    /// prescribed here.
    pub fn cells(&self) -> impl Iterator<Item = (Location, &Cell)> {
        self.cells.indexed_iter().map(|(index, cell)| (Location::from(index), cell))
    }

    /// The dot pair with an endpoint on `pos`, if any.
    pub fn dot_at(&self, pos: Location) -> Option<&Dot> {
        self.cell_at(pos).and_then(|cell| cell.dot).map(|id| &self.dots[id])
    }

    /// The path belonging to `dot`, or [`None`] for an unknown id.
    pub fn path_of(&self, dot: DotId) -> Option<&Path> {
        self.paths.get(dot)
    }

    /// All dot pairs, in id order.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// All paths, in owning-dot id order.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Whether `dot`'s path currently ends on its designated end cell.
    pub fn is_path_complete(&self, dot: DotId) -> bool {
        match (self.paths.get(dot), self.dots.get(dot)) {
            (Some(path), Some(info)) => path.end() == info.end(),
            _ => false,
        }
    }

    /// Whether every playable cell is covered by some path.
    pub fn is_board_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_obstacle() || cell.is_covered())
    }

    /// The win condition: the board is full *and* every path is complete. Connecting
    /// all pairs without covering the whole playable area does not count.
    pub fn is_solved(&self) -> bool {
        self.is_board_full() && (0..self.dots.len()).all(|dot| self.is_path_complete(dot))
    }

    /// Append `target` to `dot`'s path.
    ///
    /// Fails when `dot` is unknown, `target` is out of bounds or an obstacle, the cell
    /// belongs to a different pair's path or endpoint, the path already visits `target`
    /// (no self-crossing), or `target` is not exactly one step from the path's current
    /// end. The input layer may deliver non-adjacent samples when a finger moves fast;
    /// those simply fail here and the caller supplies the intermediate cells.
    pub fn extend_path(&mut self, dot: DotId, target: Location) -> bool {
        let Some(path) = self.paths.get(dot) else {
            return false;
        };
        let Some(cell) = self.cells.get(target.as_index()) else {
            return false;
        };

        if cell.obstacle {
            return false;
        }
        if cell.path.is_some_and(|other| other != dot) {
            return false;
        }
        if cell.dot.is_some_and(|other| other != dot) {
            return false;
        }
        if path.contains(target) {
            return false;
        }
        if Step::direction_to(path.end(), target).is_none() {
            return false;
        }

        self.paths[dot].push(target);
        self.cells[target.as_index()].path = Some(dot);
        trace!(dot, ?target, "path extended");
        true
    }

    /// Cut `dot`'s path back so that `target` becomes its last cell.
    ///
    /// Fails when the path has nothing to cut (length 1), `target` is not on the path,
    /// or `target` already is the last cell. Removed cells lose their path occupancy
    /// unless they are this dot's own endpoint cells, whose ownership is permanent.
    pub fn retract_path_to(&mut self, dot: DotId, target: Location) -> bool {
        let Some(path) = self.paths.get(dot) else {
            return false;
        };
        if path.len() <= 1 {
            return false;
        }
        let Some(index) = path.position_of(target) else {
            return false;
        };
        if index == path.len() - 1 {
            return false;
        }

        let info = self.dots[dot];
        let removed = path.cells()[index + 1..].to_vec();
        for pos in removed {
            if !info.is_endpoint(pos) {
                self.cells[pos.as_index()].path = None;
            }
        }
        self.paths[dot].truncate_after(index);
        trace!(dot, ?target, "path retracted");
        true
    }

    /// Truncate `dot`'s path back to its start cell, clearing the occupancy of every
    /// drawn cell except the dot's own endpoints. Fails only for an unknown id.
    pub fn reset_path(&mut self, dot: DotId) -> bool {
        let Some(info) = self.dots.get(dot).copied() else {
            return false;
        };

        let drawn = self.paths[dot].cells()[1..].to_vec();
        for pos in drawn {
            if !info.is_endpoint(pos) {
                self.cells[pos.as_index()].path = None;
            }
        }
        self.paths[dot].reset_to(info.start());
        self.cells[info.start().as_index()].path = Some(dot);
        trace!(dot, "path reset");
        true
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                f.write_char(if cell.obstacle {
                    '#'
                } else if let Some(dot) = cell.dot {
                    self.dots[dot].display().to_ascii_uppercase()
                } else if let Some(path) = cell.path {
                    self.paths[path].display().to_ascii_lowercase()
                } else {
                    '.'
                })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
