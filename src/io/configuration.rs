//! Geometry constants shared by layout and the render handoff

// Unit knot metrics
/// Knot circle diameter in draw-space units
pub const KNOT_DIAMETER: f64 = 40.0;

/// Horizontal and vertical pitch between neighboring knots
pub const PITCH: f64 = 35.0;

/// Side length of the diamond-shaped thread color indicators
pub const INDICATOR_SIZE: f64 = KNOT_DIAMETER * 0.9;

/// Clearance between the outermost knots and the pattern border
pub const EDGE_CLEARANCE: f64 = 0.8 * KNOT_DIAMETER;

// Color indicator placement relative to the start knot, in pitch units
/// Vertical offset of color indicators above their start knot
pub const INDICATOR_OFFSET_Y: f64 = 2.3;

/// Horizontal offset of color indicators beside two-thread start knots
pub const INDICATOR_OFFSET_X: f64 = 1.6;

// Raised indicator rows used by the W family's inner sub-ranges
/// Horizontal shrink factor for raised indicators
pub const INDICATOR_RAISED_X: f64 = 0.6;

/// Vertical stretch factor for raised indicators
pub const INDICATOR_RAISED_Y: f64 = 1.4;

/// Stroke width for rendered threads, derived from the knot diameter
pub const fn thread_width() -> f64 {
    let width = KNOT_DIAMETER / 6.0;
    if width < 1.0 { 1.0 } else { width }
}
