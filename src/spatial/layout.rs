//! Draw-space layout of a built pattern
//!
//! Assigns every knot its coordinate and computes the pattern's
//! bounding size from closed-form per-family expressions. The layout
//! is a pure function of the family, the grid dimensions and the
//! geometry constants; building the same pattern twice yields the same
//! coordinates.

use crate::algorithm::family::PatternFamily;
use crate::io::configuration::{
    EDGE_CLEARANCE, INDICATOR_OFFSET_X, INDICATOR_OFFSET_Y, INDICATOR_RAISED_Y, INDICATOR_SIZE,
    KNOT_DIAMETER, PITCH,
};
use crate::io::palette::ThreadColor;
use crate::math::vector::Vector2;
use crate::spatial::grid::KnotGrid;
use crate::spatial::knot::{EndKnotKind, Knot, KnotKind};

/// Computed placement of a pattern: knot origin and bounding size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Draw-space origin the knot coordinates grow from
    pub base: Vector2,
    /// Overall bounding width of the pattern
    pub pattern_width: f64,
    /// Overall bounding height of the pattern
    pub pattern_height: f64,
}

impl LayoutMetrics {
    /// Evaluate the family's closed-form placement expressions
    pub fn compute(family: PatternFamily, width: usize, length: usize) -> Self {
        let sqrt_2 = std::f64::consts::SQRT_2;
        let w = width as f64;
        let l = length as f64;

        let span = (w - 1.0) * PITCH;
        // margin consumed by a low color indicator beside the pattern
        let indicator_x = INDICATOR_OFFSET_X * PITCH + INDICATOR_SIZE * (sqrt_2 - 1.0) / 2.0;
        let indicator_x_far = INDICATOR_OFFSET_X * PITCH + INDICATOR_SIZE * (1.0 + sqrt_2) / 2.0;
        let indicator_y = INDICATOR_OFFSET_Y * PITCH + INDICATOR_SIZE * (sqrt_2 - 1.0) / 2.0;
        let indicator_y_raised =
            INDICATOR_RAISED_Y * INDICATOR_OFFSET_Y * PITCH + INDICATOR_SIZE * (sqrt_2 - 1.0) / 2.0;

        match family {
            PatternFamily::L => Self {
                base: Vector2::new(indicator_x, indicator_y),
                pattern_width: span
                    + indicator_x
                    + KNOT_DIAMETER
                    + 1.5 * PITCH
                    + 2.0 * EDGE_CLEARANCE,
                pattern_height: (2.0 * (l - 1.0) + (w - 1.0)) * PITCH
                    + KNOT_DIAMETER
                    + indicator_y
                    + 2.0 * EDGE_CLEARANCE,
            },
            PatternFamily::R => Self {
                base: Vector2::new(1.5 * PITCH, indicator_y),
                pattern_width: span + indicator_x + 2.5 * PITCH + 2.0 * EDGE_CLEARANCE,
                pattern_height: (2.0 * (l - 1.0) + (w - 1.0)) * PITCH
                    + KNOT_DIAMETER
                    + indicator_y
                    + 2.0 * EDGE_CLEARANCE,
            },
            PatternFamily::M => Self {
                base: Vector2::new(indicator_x, indicator_y),
                pattern_width: span + indicator_x + indicator_x_far + 2.0 * EDGE_CLEARANCE,
                pattern_height: (2.0 * (l - 1.0) + (w - 1.0) / 2.0) * PITCH
                    + KNOT_DIAMETER
                    + indicator_y
                    + 2.0 * EDGE_CLEARANCE,
            },
            PatternFamily::A => Self {
                base: Vector2::new(indicator_x, indicator_y - (w - 1.0) / 2.0 * PITCH),
                pattern_width: span + indicator_x + indicator_x_far + 2.0 * EDGE_CLEARANCE,
                pattern_height: (2.0 * (l - 1.0) + (w - 1.0) / 2.0) * PITCH
                    + KNOT_DIAMETER
                    + indicator_y
                    + 2.0 * EDGE_CLEARANCE,
            },
            PatternFamily::W => {
                let top = indicator_y.max(indicator_y_raised);
                Self {
                    base: Vector2::new(indicator_x, top),
                    pattern_width: span + indicator_x + indicator_x_far + 2.0 * EDGE_CLEARANCE,
                    pattern_height: (2.0 * (l - 1.0) + (w - 1.0) / 4.0) * PITCH
                        + KNOT_DIAMETER
                        + top
                        + 2.0 * EDGE_CLEARANCE,
                }
            }
        }
    }
}

/// Row offset of a column inside its diagonal sub-range
///
/// Ascending ranges climb away from their left boundary, descending
/// ranges from their right boundary; the offsets meet at the seam
/// columns so coordinates stay continuous across them.
pub(crate) fn diagonal_offset(family: PatternFamily, width: usize, x: usize) -> f64 {
    let offset = match family {
        PatternFamily::L => x,
        PatternFamily::R => width - 1 - x,
        PatternFamily::M => {
            let mid = PatternFamily::middle_column(width);
            if x <= mid { x } else { width - 1 - x }
        }
        PatternFamily::A => {
            let mid = PatternFamily::middle_column(width);
            if x >= mid { x } else { width - 1 - x }
        }
        PatternFamily::W => {
            let span = PatternFamily::quarter_span(width);
            let (x2, x4) = (2 * span, 4 * span);
            if x <= span {
                x
            } else if x <= x2 {
                x2 - x
            } else if x <= 3 * span {
                x - x2
            } else {
                x4 - x
            }
        }
    };
    offset as f64
}

/// Assign every knot its draw-space coordinate
pub fn assign_positions(grid: &mut KnotGrid, family: PatternFamily) -> LayoutMetrics {
    let metrics = LayoutMetrics::compute(family, grid.width(), grid.length());
    let width = grid.width();

    for y in 0..grid.length() {
        for x in 0..width {
            let offset = diagonal_offset(family, width, x);
            if let Some(knot) = grid.get_mut([x, y]) {
                knot.position = Vector2::new(
                    metrics.base.x + EDGE_CLEARANCE + PITCH * x as f64,
                    metrics.base.y + EDGE_CLEARANCE + PITCH * (2.0 * y as f64 + offset),
                );
            }
        }
    }

    metrics
}

/// Renderer-facing summary of one knot
///
/// Carries everything a renderer needs to draw the knot circle and its
/// outgoing connections: straight segments where a line flag is set,
/// an edge return arc where an arc flag is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnotSketch {
    /// Draw-space coordinate of the knot's top-left corner
    pub position: Vector2,
    /// Current routing kind
    pub kind: KnotKind,
    /// Exit category for last-row knots
    pub end_kind: Option<EndKnotKind>,
    /// Knot sits in column 0
    pub is_edge_left: bool,
    /// Knot sits in the last column
    pub is_edge_right: bool,
    /// Color the knot currently displays
    pub color: ThreadColor,
    /// Draw a straight lower-left exit segment
    pub line_out_left: bool,
    /// Draw a straight lower-right exit segment
    pub line_out_right: bool,
    /// Draw the left edge return arc
    pub arc_out_left: bool,
    /// Draw the right edge return arc
    pub arc_out_right: bool,
}

impl KnotSketch {
    /// Summarize a knot for rendering
    pub const fn of(knot: &Knot) -> Self {
        let (line_out_left, line_out_right, arc_out_left, arc_out_right) = if knot.is_end_row {
            match knot.end_kind {
                Some(EndKnotKind::LikeL) => (false, true, false, false),
                Some(EndKnotKind::LikeR) => (true, false, false, false),
                Some(EndKnotKind::Both) => (true, true, false, false),
                Some(EndKnotKind::None) | None => (false, false, false, false),
            }
        } else if knot.is_edge_left {
            (false, true, true, false)
        } else if knot.is_edge_right {
            (true, false, false, true)
        } else {
            (true, true, false, false)
        };

        Self {
            position: knot.position,
            kind: knot.kind,
            end_kind: knot.end_kind,
            is_edge_left: knot.is_edge_left,
            is_edge_right: knot.is_edge_right,
            color: knot.displayed_color(),
            line_out_left,
            line_out_right,
            arc_out_left,
            arc_out_right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::builder::build_family;

    fn laid_out(family: PatternFamily, width: usize, length: usize) -> (KnotGrid, LayoutMetrics) {
        let mut grid = KnotGrid::new(width, length).unwrap();
        build_family(&mut grid, family).unwrap();
        let metrics = assign_positions(&mut grid, family);
        (grid, metrics)
    }

    #[test]
    fn test_family_l_reference_dimensions() {
        // diameter 40, pitch 35, indicator 36, clearance 32 for a 5x3 L pattern
        let metrics = LayoutMetrics::compute(PatternFamily::L, 5, 3);
        let sqrt_2 = std::f64::consts::SQRT_2;
        let indicator_x = 1.6 * 35.0 + 36.0 * (sqrt_2 - 1.0) / 2.0;
        let indicator_y = 2.3 * 35.0 + 36.0 * (sqrt_2 - 1.0) / 2.0;

        assert!((metrics.base.x - indicator_x).abs() < 1e-9);
        assert!((metrics.base.y - indicator_y).abs() < 1e-9);
        assert!((metrics.pattern_width - (140.0 + indicator_x + 40.0 + 52.5 + 64.0)).abs() < 1e-9);
        assert!((metrics.pattern_height - (280.0 + 40.0 + indicator_y + 64.0)).abs() < 1e-9);
    }

    #[test]
    fn test_positions_follow_the_diagonal() {
        let (grid, metrics) = laid_out(PatternFamily::L, 5, 3);

        let origin = grid.get([0, 0]).unwrap().position;
        assert!((origin.x - (metrics.base.x + EDGE_CLEARANCE)).abs() < 1e-9);
        assert!((origin.y - (metrics.base.y + EDGE_CLEARANCE)).abs() < 1e-9);

        // one column right climbs one pitch, one row down climbs two
        let right = grid.get([1, 0]).unwrap().position;
        assert!((right.x - origin.x - PITCH).abs() < 1e-9);
        assert!((right.y - origin.y - PITCH).abs() < 1e-9);
        let below = grid.get([0, 1]).unwrap().position;
        assert!((below.y - origin.y - 2.0 * PITCH).abs() < 1e-9);
    }

    #[test]
    fn test_m_family_offsets_are_continuous_at_the_seam() {
        let (grid, _) = laid_out(PatternFamily::M, 5, 4);

        // columns 1, 2, 3 of a width-5 M pattern share the seam apex height
        let seam_y = grid.get([2, 0]).unwrap().position.y;
        let left_y = grid.get([1, 0]).unwrap().position.y;
        let right_y = grid.get([3, 0]).unwrap().position.y;
        assert!((left_y + PITCH - seam_y).abs() < 1e-9);
        assert!((right_y + PITCH - seam_y).abs() < 1e-9);
    }

    #[test]
    fn test_w_family_offsets_zigzag() {
        let width = 13;
        let expected: Vec<f64> = vec![
            0.0, 1.0, 2.0, 3.0, 2.0, 1.0, 0.0, 1.0, 2.0, 3.0, 2.0, 1.0, 0.0,
        ];
        for (x, want) in expected.iter().enumerate() {
            let got = diagonal_offset(PatternFamily::W, width, x);
            assert!((got - want).abs() < f64::EPSILON, "column {x}");
        }
    }

    #[test]
    fn test_a_family_base_sits_above_the_fold() {
        let m = LayoutMetrics::compute(PatternFamily::M, 5, 4);
        let a = LayoutMetrics::compute(PatternFamily::A, 5, 4);
        assert!((m.base.y - a.base.y - 2.0 * PITCH).abs() < 1e-9);
        assert!((m.pattern_height - a.pattern_height).abs() < 1e-9);
    }

    #[test]
    fn test_sketch_flags() {
        let (grid, _) = laid_out(PatternFamily::L, 5, 3);

        let interior = KnotSketch::of(grid.get([2, 1]).unwrap());
        assert!(interior.line_out_left && interior.line_out_right);
        assert!(!interior.arc_out_left && !interior.arc_out_right);

        let left_edge = KnotSketch::of(grid.get([0, 1]).unwrap());
        assert!(left_edge.arc_out_left && left_edge.line_out_right);
        assert!(!left_edge.line_out_left);

        let right_edge = KnotSketch::of(grid.get([4, 1]).unwrap());
        assert!(right_edge.arc_out_right && right_edge.line_out_left);

        let terminal = KnotSketch::of(grid.get([4, 2]).unwrap());
        assert!(!terminal.line_out_left && !terminal.line_out_right);
        assert!(!terminal.arc_out_left && !terminal.arc_out_right);

        let end = KnotSketch::of(grid.get([1, 2]).unwrap());
        assert!(end.line_out_right && !end.line_out_left);
    }
}
