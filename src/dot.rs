use crate::location::Location;

/// Identifier of a dot pair. Ids are small, contiguous, and scoped to one level,
/// so dots and paths live in dense arrays indexed by id rather than maps.
pub type DotId = usize;

/// A pair of fixed endpoint cells sharing a color tag, which a path must connect.
/// Immutable once the board is built.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Dot {
    id: DotId,
    display: char,
    start: Location,
    end: Location,
}

impl Dot {
    pub(crate) fn new(id: DotId, display: char, start: Location, end: Location) -> Self {
        Self { id, display, start, end }
    }

    /// This dot's id.
    pub fn id(&self) -> DotId {
        self.id
    }

    /// The display tag standing in for this dot's color. Rendering only; validation
    /// never consults it.
    pub fn display(&self) -> char {
        self.display
    }

    /// The cell this dot's path is anchored at.
    pub fn start(&self) -> Location {
        self.start
    }

    /// The cell this dot's path must reach.
    pub fn end(&self) -> Location {
        self.end
    }

    /// Whether `pos` is this dot's start or end cell.
    pub fn is_endpoint(&self, pos: Location) -> bool {
        self.start == pos || self.end == pos
    }
}
