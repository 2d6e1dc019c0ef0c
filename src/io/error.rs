//! Error types for pattern construction and propagation

use std::fmt;

use crate::algorithm::family::PatternFamily;
use crate::spatial::knot::KnotDirection;

/// Main error type for all pattern operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Requested grid dimensions cannot hold a pattern
    InvalidDimension {
        /// Requested number of columns
        width: usize,
        /// Requested number of rows
        length: usize,
    },

    /// Width does not satisfy the family's column-count requirement
    ///
    /// Seam columns must fall on whole columns: M and A need an odd
    /// width, W needs a multiple of four. The caller adjusts and
    /// re-requests; the width is never silently coerced.
    InvalidParity {
        /// Family whose requirement was violated
        family: PatternFamily,
        /// Requested number of columns
        width: usize,
        /// Human-readable statement of the requirement
        requirement: &'static str,
    },

    /// A family tag outside {L, R, M, A, W} was read from a document
    InvalidFamilyTag {
        /// The offending tag
        tag: String,
    },

    /// A non-end-row knot is missing the link a walk needs
    ///
    /// Indicates a builder defect, never a normal walk terminal.
    BrokenLink {
        /// Grid position of the defective knot
        position: [usize; 2],
        /// Exit direction whose link was absent
        direction: KnotDirection,
    },

    /// A thread walk exceeded its step budget
    ///
    /// The link graph reachable from a start-row entry is acyclic, so a
    /// walk longer than W×L steps means the topology is corrupt.
    WalkDidNotTerminate {
        /// Step budget that was exhausted
        limit: usize,
    },

    /// A mutation named a knot outside the grid
    ///
    /// Mutation indices are a caller contract; this is a programmer
    /// error, not a recoverable condition.
    KnotOutOfRange {
        /// The offending `[column, row]` index
        position: [usize; 2],
    },

    /// A mutation named a thread index past the entry list
    ThreadOutOfRange {
        /// The offending thread index
        index: usize,
        /// Number of threads the pattern carries
        count: usize,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, length } => {
                write!(
                    f,
                    "Invalid pattern dimensions {width}x{length} (need at least 1x1)"
                )
            }
            Self::InvalidParity {
                family,
                width,
                requirement,
            } => {
                write!(
                    f,
                    "Width {width} is invalid for family {family}: {requirement}"
                )
            }
            Self::InvalidFamilyTag { tag } => {
                write!(
                    f,
                    "Unknown pattern family tag '{tag}' (expected L, R, M, A or W)"
                )
            }
            Self::BrokenLink {
                position,
                direction,
            } => {
                write!(
                    f,
                    "Knot ({}, {}) has no link for {direction:?}; the topology is inconsistent",
                    position[0], position[1]
                )
            }
            Self::WalkDidNotTerminate { limit } => {
                write!(f, "Thread walk did not terminate within {limit} steps")
            }
            Self::KnotOutOfRange { position } => {
                write!(f, "Knot ({}, {}) is outside the grid", position[0], position[1])
            }
            Self::ThreadOutOfRange { index, count } => {
                write!(f, "Thread {index} is out of range (pattern has {count} threads)")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Convenience type alias for pattern results
pub type Result<T> = std::result::Result<T, PatternError>;
