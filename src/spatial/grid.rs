//! The owning arena of knots
//!
//! Holds every knot of a pattern in a W×L array indexed by `[column, row]`.
//! Directional links between knots are stored as indices into this arena
//! and resolved through the checked accessors here, so knot state stays
//! shared rather than duplicated when several threads traverse one knot.

use ndarray::Array2;

use crate::io::error::{PatternError, Result};
use crate::spatial::knot::{Knot, KnotIndex};

/// W×L arena of knots with checked positional access
#[derive(Debug, Clone, PartialEq)]
pub struct KnotGrid {
    knots: Array2<Knot>,
}

impl KnotGrid {
    /// Allocate a grid with its structural flags in place
    ///
    /// Row 0 is the start row, row `length - 1` the end row; columns 0
    /// and `width - 1` are the edges. Links, kinds and colors start at
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidDimension`] if either dimension
    /// is zero; no partial grid is observable.
    pub fn new(width: usize, length: usize) -> Result<Self> {
        if width < 1 || length < 1 {
            return Err(PatternError::InvalidDimension { width, length });
        }

        let knots = Array2::from_shape_fn((width, length), |(x, y)| {
            Knot::new(y == 0, y == length - 1, x == 0, x == width - 1)
        });

        Ok(Self { knots })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.knots.nrows()
    }

    /// Number of rows
    pub fn length(&self) -> usize {
        self.knots.ncols()
    }

    /// Knot at `[column, row]`, if in range
    pub fn get(&self, index: KnotIndex) -> Option<&Knot> {
        self.knots.get((index[0], index[1]))
    }

    /// Mutable knot at `[column, row]`, if in range
    pub fn get_mut(&mut self, index: KnotIndex) -> Option<&mut Knot> {
        self.knots.get_mut((index[0], index[1]))
    }

    /// Iterate all knots with their indices, column-major
    pub fn iter(&self) -> impl Iterator<Item = (KnotIndex, &Knot)> {
        self.knots
            .indexed_iter()
            .map(|((x, y), knot)| ([x, y], knot))
    }
}
