//! The closed set of structural pattern families
//!
//! A family fixes how the builder partitions columns into diagonal
//! sub-ranges, which seam overrides apply where the sub-ranges meet,
//! and which closed-form layout expressions size the pattern.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::io::error::{PatternError, Result};

/// Structural shape of a ribbon pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternFamily {
    /// Single ascending range; all threads drift left to right
    L,
    /// Single descending range, the mirror of L
    R,
    /// Two ranges meeting in a falling seam at the middle column
    M,
    /// Two ranges meeting in a rising seam at the middle column
    A,
    /// Four alternating ranges with three seam columns
    W,
}

/// Diagonal flow of a column sub-range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Threads crossing rightward stay in their row
    Ascending,
    /// Threads crossing leftward stay in their row
    Descending,
}

/// Which link override applies at a seam column
///
/// `FoldA` sends both exits a row down (M-style seam), `FoldB` keeps
/// both exits in the seam's own row (A-style seam).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeamStyle {
    /// Both seam exits descend to the next row
    FoldA,
    /// Both seam exits stay in the current row
    FoldB,
}

impl PatternFamily {
    /// All families, in tag order
    pub const ALL: [Self; 5] = [Self::L, Self::R, Self::M, Self::A, Self::W];

    /// One-letter tag used by documents and display
    pub const fn code(self) -> &'static str {
        match self {
            Self::L => "L",
            Self::R => "R",
            Self::M => "M",
            Self::A => "A",
            Self::W => "W",
        }
    }

    /// Column-count requirement of this family
    ///
    /// Seam columns must land on whole columns: M and A fold at the
    /// middle column, W folds at the three quarter columns.
    fn width_requirement(self) -> (fn(usize) -> bool, &'static str) {
        match self {
            Self::L | Self::R => (|w| w >= 2, "width must be at least 2"),
            Self::M | Self::A => (|w| w >= 3 && w % 2 == 1, "width must be odd and at least 3"),
            Self::W => (
                |w| w >= 5 && w % 4 == 1,
                "width must be one more than a positive multiple of four",
            ),
        }
    }

    /// Check dimensions against this family's requirements
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidDimension`] for an empty grid and
    /// [`PatternError::InvalidParity`] when the width cannot host this
    /// family's seams. Nothing is coerced on behalf of the caller.
    pub fn validate(self, width: usize, length: usize) -> Result<()> {
        if width < 1 || length < 1 {
            return Err(PatternError::InvalidDimension { width, length });
        }
        let (accepts, requirement) = self.width_requirement();
        if !accepts(width) {
            return Err(PatternError::InvalidParity {
                family: self,
                width,
                requirement,
            });
        }
        Ok(())
    }

    /// Middle column for the M and A seams
    pub const fn middle_column(width: usize) -> usize {
        width / 2
    }

    /// Sub-range width for the W family's four ranges
    pub const fn quarter_span(width: usize) -> usize {
        width / 4
    }

    /// Number of threads a pattern of this width carries
    pub const fn thread_count(width: usize) -> usize {
        width + 1
    }
}

impl fmt::Display for PatternFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PatternFamily {
    type Err = PatternError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "L" => Ok(Self::L),
            "R" => Ok(Self::R),
            "M" => Ok(Self::M),
            "A" => Ok(Self::A),
            "W" => Ok(Self::W),
            _ => Err(PatternError::InvalidFamilyTag {
                tag: tag.to_owned(),
            }),
        }
    }
}
