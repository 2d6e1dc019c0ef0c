//! Knot-grid topology, thread propagation and layout geometry for woven ribbon patterns
//!
//! The system wires a W×L grid of knots into one of five structural
//! families, traces each colored thread through the resulting link
//! graph, and computes the deterministic draw-space layout a renderer
//! consumes.

#![forbid(unsafe_code)]

/// Pattern building, thread propagation and the pattern aggregate
pub mod algorithm;
/// Error handling, constants, colors and the document form
pub mod io;
/// Vector and unit-knot geometry primitives
pub mod math;
/// Knot records, the owning grid and draw-space layout
pub mod spatial;

pub use algorithm::family::PatternFamily;
pub use algorithm::pattern::RibbonPattern;
pub use io::error::{PatternError, Result};
