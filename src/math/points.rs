//! Relative entry, exit and arc reference geometry for one knot
//!
//! All points are expressed for a unit knot and scaled to the configured
//! diameter once at construction. Renderers combine them with a knot's
//! absolute position to draw thread segments and the edge return arcs.

use crate::math::vector::Vector2;

/// Precomputed relative geometry of a single knot
///
/// Pure value object; the same instance serves every knot of a pattern
/// because only absolute positions differ between knots.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotPoints {
    /// Thread entry point on the upper-left diagonal
    pub left_entry: Vector2,
    /// Thread entry point on the upper-right diagonal
    pub right_entry: Vector2,
    /// Upper end of the lower-left exit segment
    pub left_exit_top: Vector2,
    /// Lower end of the lower-left exit segment
    pub left_exit_bottom: Vector2,
    /// Upper end of the lower-right exit segment
    pub right_exit_top: Vector2,
    /// Lower end of the lower-right exit segment
    pub right_exit_bottom: Vector2,
    /// Radius of the edge return arcs
    pub arc_radius: f64,
    /// Side of the square that frames an edge return arc circle
    pub arc_square_side: f64,
    /// Reference corner of the arc frame on the left edge
    pub arc_ref_left: Vector2,
    /// Reference corner of the arc frame on the right edge
    pub arc_ref_right: Vector2,
    /// Start angle of the left edge arc, in degrees
    pub start_angle_left: f64,
    /// Start angle of the right edge arc, in degrees
    pub start_angle_right: f64,
    /// Sweep of both edge arcs, in degrees
    pub span_angle: f64,
}

impl KnotPoints {
    /// Compute the relative geometry for a knot diameter and grid pitch
    pub fn new(diameter: f64, pitch: f64) -> Self {
        let ratio = pitch / diameter;
        let sqrt_2 = std::f64::consts::SQRT_2;
        // Distance from a corner of the knot square to the diagonal entry point
        let corner_inset = (sqrt_2 - 1.0) / 2.0 / sqrt_2;

        let arc_center = Vector2::new(0.5 / sqrt_2 - ratio, 0.5 / sqrt_2 - ratio);
        let unit_radius = arc_center.x.hypot(arc_center.y);

        Self {
            left_entry: Vector2::new(corner_inset, corner_inset).scaled(diameter),
            right_entry: Vector2::new(1.0 - corner_inset, corner_inset).scaled(diameter),
            left_exit_top: Vector2::new(0.5 - 0.5 / sqrt_2, 0.5 + 0.5 / sqrt_2).scaled(diameter),
            left_exit_bottom: Vector2::new(0.5 / sqrt_2 - ratio + 0.5, ratio + corner_inset)
                .scaled(diameter),
            right_exit_top: Vector2::new(0.5 / sqrt_2 + 0.5, 0.5 / sqrt_2 + 0.5).scaled(diameter),
            right_exit_bottom: Vector2::new(ratio + corner_inset, ratio + corner_inset)
                .scaled(diameter),
            arc_radius: unit_radius * diameter,
            arc_square_side: 2.0 * unit_radius * diameter,
            arc_ref_left: Vector2::new(
                ratio - unit_radius - 0.5 * sqrt_2 + 0.5,
                ratio - unit_radius + 0.5,
            )
            .scaled(diameter),
            arc_ref_right: Vector2::new(
                0.5 * sqrt_2 - ratio - unit_radius + 0.5,
                ratio - unit_radius + 0.5,
            )
            .scaled(diameter),
            start_angle_left: 135.0,
            start_angle_right: 45.0,
            span_angle: 90.0,
        }
    }
}
