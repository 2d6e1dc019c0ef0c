//! Spatial data structures of the weave
//!
//! This module contains the grid-related functionality:
//! - Knot records and the direction/kind vocabulary
//! - The owning W×L knot arena
//! - Draw-space layout and the renderer handoff

/// The owning arena of knots
pub mod grid;
/// Knot records and direction/kind enums
pub mod knot;
/// Draw-space layout and bounding size
pub mod layout;

pub use grid::KnotGrid;
