use std::num::NonZero;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::builder::{BoardBuilder, BuildError};
use crate::location::Location;

/// Problems loading a level descriptor or turning it into a [`Board`].
///
/// All of these are fatal to the level attempt: the caller requests a different level
/// or surfaces an error state. [`NotFound`](Self::NotFound) in particular is the
/// non-fatal "no such level" signal a level-select screen is expected to handle.
#[derive(Debug, Error)]
pub enum LevelError {
    /// No level exists with the requested number.
    #[error("level {0} not found")]
    NotFound(u32),
    /// The descriptor could not be deserialized.
    #[error("malformed level descriptor: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The grid has a zero dimension.
    #[error("grid dimensions must be at least 1x1")]
    EmptyGrid,
    /// Dot ids are not contiguous from zero.
    #[error("dot ids must be dense from zero")]
    SparseDotIds,
    /// The descriptor deserialized but violates board placement rules.
    #[error("unbuildable level: {0}")]
    Unbuildable(BuildError),
}

/// A grid position in wire form, `{row, col}`, zero-based.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CellPos {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl From<CellPos> for Location {
    fn from(value: CellPos) -> Self {
        Self(value.col, value.row)
    }
}

/// One dot pair of a level descriptor.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DotPair {
    /// Level-scoped pair id. Ids must form a dense range starting at 0.
    pub id: usize,
    /// Color in whatever form the presentation layer understands, e.g. `"#FF0000"`.
    /// The core derives its own display tags and never interprets this.
    pub color: String,
    /// The cell the pair's path is anchored at.
    pub start: CellPos,
    /// The cell the pair's path must reach.
    pub end: CellPos,
}

/// An immutable level descriptor. Consumed once at board construction; never mutated
/// by the core.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Level {
    /// The level number this descriptor belongs to.
    pub level: u32,
    /// Grid height, in cells.
    pub rows: usize,
    /// Grid width, in cells.
    pub cols: usize,
    /// The dot pairs to place.
    pub dots: Vec<DotPair>,
    /// Cells that can never hold a dot or a path segment.
    #[serde(default)]
    pub obstacles: Vec<CellPos>,
}

impl Level {
    /// Parse a descriptor from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<&Level> for Board {
    type Error = LevelError;

    fn try_from(level: &Level) -> Result<Self, Self::Error> {
        let (Some(cols), Some(rows)) = (NonZero::new(level.cols), NonZero::new(level.rows))
        else {
            return Err(LevelError::EmptyGrid);
        };

        let mut pairs = level.dots.clone();
        pairs.sort_by_key(|pair| pair.id);
        if pairs.iter().enumerate().any(|(index, pair)| pair.id != index) {
            return Err(LevelError::SparseDotIds);
        }

        let mut builder = BoardBuilder::with_dims((cols, rows));
        for pos in &level.obstacles {
            builder.add_obstacle(Location::from(*pos));
        }
        for pair in &pairs {
            let display = (b'A' + (pair.id % 26) as u8) as char;
            builder.add_dot_pair(display, (pair.start.into(), pair.end.into()));
        }

        builder.build().map_err(|reasons| {
            // build never reports an empty reason list
            LevelError::Unbuildable(reasons[0])
        })
    }
}

/// Supplies level descriptors by level number. Implementations may read bundled
/// assets, files, or anything else; the core only consumes the descriptor.
pub trait LevelSource {
    /// Fetch the descriptor for level `number`.
    fn level(&self, number: u32) -> Result<Level, LevelError>;
}

static BUNDLED: &str = include_str!("levels.json");

/// The level catalog bundled with the crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct BundledLevels;

impl LevelSource for BundledLevels {
    fn level(&self, number: u32) -> Result<Level, LevelError> {
        let levels: Vec<Level> = serde_json::from_str(BUNDLED)?;
        levels
            .into_iter()
            .find(|level| level.level == number)
            .ok_or(LevelError::NotFound(number))
    }
}
