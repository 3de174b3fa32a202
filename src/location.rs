use std::num::NonZero;

use ndarray::Ix;

/// Numeric type of a single board coordinate.
pub type Coord = usize;
/// A nonzero board dimension, in cells.
pub type Dimension = NonZero<Coord>;

/// A cell position on the board. Equality is by field value.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
// x, y
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    /// Offset this location by a signed delta, wrapping on underflow.
    /// Wrapped results land far out of bounds and fail the board's bounds checks.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
