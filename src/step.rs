use strum::VariantArray;

use crate::location::Location;

/// The four cardinal moves available on a rectangular board.
///
/// Paths grow one step at a time; two cells are adjacent exactly when some variant
/// steps from one to the other.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Step {
    /// Toward lower rows.
    Up,
    /// Toward higher rows.
    Down,
    /// Toward lower columns.
    Left,
    /// Toward higher columns.
    Right,
}

impl Step {
    /// Attempt the step from `location` in the direction specified by `self` and return
    /// the resultant [`Location`].
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }

    /// Determine the direction from `a` to `b` by calling [`attempt_from`](Self::attempt_from)
    /// until one works. Returns [`None`] for locations which are not adjacent, which is
    /// the board's adjacency test: legal extensions move exactly one step.
    pub fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }
}
