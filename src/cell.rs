use crate::dot::DotId;

/// Occupancy record for one board cell.
///
/// Obstacle cells hold nothing, ever. A dot's endpoint cells carry that dot's id for
/// the life of the board; path occupancy comes and goes as strokes are drawn and
/// retracted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Cell {
    pub(crate) obstacle: bool,
    pub(crate) dot: Option<DotId>,
    pub(crate) path: Option<DotId>,
}

impl Cell {
    /// Whether this cell can never hold a dot or a path segment.
    pub fn is_obstacle(&self) -> bool {
        self.obstacle
    }

    /// The dot pair whose endpoint sits on this cell, if any.
    pub fn dot(&self) -> Option<DotId> {
        self.dot
    }

    /// The path currently covering this cell, if any.
    pub fn path(&self) -> Option<DotId> {
        self.path
    }

    /// Whether this cell counts toward board coverage: playable and covered by a path.
    pub fn is_covered(&self) -> bool {
        !self.obstacle && self.path.is_some()
    }
}
