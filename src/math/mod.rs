//! Mathematical primitives for the layout geometry

/// Relative entry, exit and arc geometry of a single knot
pub mod points;
/// 2D point and displacement type
pub mod vector;
