use std::num::NonZero;

use itertools::Itertools;
use ndarray::Array2;
use thiserror::Error;
use tracing::debug;

use crate::board::Board;
use crate::cell::Cell;
use crate::dot::Dot;
use crate::location::{Dimension, Location};
use crate::path::Path;

/// Reasons a builder may become invalid while building. Any of these makes the level
/// descriptor unusable; the caller falls back to another level or an error screen
/// rather than attempting recovery here.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum BuildError {
    /// A dot or obstacle was placed outside the bounds specified by `with_dims`.
    #[error("feature out of bounds at {0:?}")]
    FeatureOutOfBounds(Location),
    /// Two dots claim the same cell, or a dot pair starts and ends on one cell.
    #[error("dot collision at {0:?}")]
    DotCollision(Location),
    /// A dot endpoint and an obstacle claim the same cell.
    #[error("dot on obstacle at {0:?}")]
    DotOnObstacle(Location),
}

/// A builder for rectangular puzzle boards.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state
/// at some point. Placement problems are accumulated rather than panicking: once any
/// reason is recorded, later calls do nothing and [`build`](Self::build) reports the
/// collected reasons.
///
/// Dot ids are assigned in insertion order, starting at 0.
#[derive(Clone)]
pub struct BoardBuilder {
    // width, height
    dims: (Dimension, Dimension),
    dots: Vec<(char, (Location, Location))>,
    obstacles: Vec<Location>,
    invalid_reasons: Vec<BuildError>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::new(5).unwrap(), NonZero::new(5).unwrap()))
    }
}

impl BoardBuilder {
    /// Construct a new builder with the specified dimensions, in `(width, height)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            dots: Default::default(),
            obstacles: Default::default(),
            invalid_reasons: Default::default(),
        }
    }

    fn contains(&self, location: Location) -> bool {
        location.0 < self.dims.0.get() && location.1 < self.dims.1.get()
    }

    fn occupied_by_dot(&self, location: Location) -> bool {
        self.dots
            .iter()
            .flat_map(|(_, (start, end))| [*start, *end])
            .contains(&location)
    }

    /// Add a dot pair in `(start, end)` order; the path for this pair will be anchored
    /// at `start`.
    ///
    /// May record [`FeatureOutOfBounds`](BuildError::FeatureOutOfBounds),
    /// [`DotCollision`](BuildError::DotCollision), or
    /// [`DotOnObstacle`](BuildError::DotOnObstacle).
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_dot_pair(&mut self, display: char, locations: (Location, Location)) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        for location in [locations.0, locations.1] {
            if !self.contains(location) {
                self.invalid_reasons.push(BuildError::FeatureOutOfBounds(location));
                return self;
            }
            if self.occupied_by_dot(location) {
                self.invalid_reasons.push(BuildError::DotCollision(location));
                return self;
            }
            if self.obstacles.contains(&location) {
                self.invalid_reasons.push(BuildError::DotOnObstacle(location));
                return self;
            }
        }
        if locations.0 == locations.1 {
            self.invalid_reasons.push(BuildError::DotCollision(locations.0));
            return self;
        }

        self.dots.push((display, locations));
        self
    }

    /// Mark `location` as an obstacle: no dot or path may ever occupy it. Adding the
    /// same obstacle twice is allowed and does nothing.
    ///
    /// May record [`FeatureOutOfBounds`](BuildError::FeatureOutOfBounds) or
    /// [`DotOnObstacle`](BuildError::DotOnObstacle).
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_obstacle(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !self.contains(location) {
            self.invalid_reasons.push(BuildError::FeatureOutOfBounds(location));
            return self;
        }
        if self.occupied_by_dot(location) {
            self.invalid_reasons.push(BuildError::DotOnObstacle(location));
            return self;
        }
        if !self.obstacles.contains(&location) {
            self.obstacles.push(location);
        }
        self
    }

    /// Check the validity of this builder, ensuring no [`BuildError`] condition has
    /// arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuildError>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuildError>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`], with every dot's path
    /// initialized to its start cell. If the builder is invalid for any reason, a
    /// reference to a [`Vec`] of [`BuildError`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<BuildError>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let mut cells =
            Array2::from_shape_simple_fn((self.dims.1.get(), self.dims.0.get()), Cell::default);
        for location in &self.obstacles {
            cells[location.as_index()].obstacle = true;
        }

        let mut dots = Vec::with_capacity(self.dots.len());
        let mut paths = Vec::with_capacity(self.dots.len());
        for (id, (display, (start, end))) in self.dots.iter().enumerate() {
            cells[start.as_index()].dot = Some(id);
            cells[end.as_index()].dot = Some(id);
            // the initial length-1 path covers the start cell only
            cells[start.as_index()].path = Some(id);

            dots.push(Dot::new(id, *display, *start, *end));
            paths.push(Path::new(id, *display, *start));
        }

        debug!(
            width = self.dims.0.get(),
            height = self.dims.1.get(),
            dots = dots.len(),
            obstacles = self.obstacles.len(),
            "board built"
        );
        Ok(Board { cells, dots, paths, dims: self.dims })
    }
}
