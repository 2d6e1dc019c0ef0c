//! Thread entry points and their default colors
//!
//! A pattern of width W carries W+1 threads. Each thread owns a color,
//! a start knot in row 0, the diagonal it enters on, and the placement
//! of its color indicator above the grid. The first two threads of a
//! range share a start knot, one per input side, which is why row-0
//! anchors need both passes of the propagation driver before their
//! displayed color settles.

use crate::algorithm::family::PatternFamily;
use crate::io::configuration::{
    INDICATOR_OFFSET_X, INDICATOR_OFFSET_Y, INDICATOR_RAISED_X, INDICATOR_RAISED_Y, PITCH,
};
use crate::io::palette::{ThreadColor, palette_color};
use crate::math::vector::Vector2;
use crate::spatial::knot::{KnotDirection, KnotIndex, ThreadSide};

/// One configured thread of a pattern
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadEntry {
    /// Current thread color
    pub color: ThreadColor,
    /// Start knot in row 0
    pub start: KnotIndex,
    /// Diagonal the thread enters its start knot on
    pub direction: KnotDirection,
    /// Input side of the start knot painted before any walk runs
    pub seed_side: Option<ThreadSide>,
    /// Displacement from the start knot to the color indicator
    pub indicator_shift: Vector2,
}

/// Displacement presets for the color indicators
fn shift_left() -> Vector2 {
    Vector2::new(-INDICATOR_OFFSET_X * PITCH, -INDICATOR_OFFSET_Y * PITCH)
}

fn shift_none() -> Vector2 {
    Vector2::new(0.0, -INDICATOR_OFFSET_Y * PITCH)
}

fn shift_right() -> Vector2 {
    Vector2::new(INDICATOR_OFFSET_X * PITCH, -INDICATOR_OFFSET_Y * PITCH)
}

fn shift_left_raised() -> Vector2 {
    Vector2::new(
        -INDICATOR_RAISED_X * INDICATOR_OFFSET_X * PITCH,
        -INDICATOR_RAISED_Y * INDICATOR_OFFSET_Y * PITCH,
    )
}

fn shift_right_raised() -> Vector2 {
    Vector2::new(
        INDICATOR_RAISED_X * INDICATOR_OFFSET_X * PITCH,
        -INDICATOR_RAISED_Y * INDICATOR_OFFSET_Y * PITCH,
    )
}

/// Build the W+1 thread entries for a family, defaults applied
pub fn thread_entries(family: PatternFamily, width: usize) -> Vec<ThreadEntry> {
    let colors = default_colors(family, width);
    (0..PatternFamily::thread_count(width))
        .map(|i| {
            let (start, direction, seed_side, indicator_shift) = entry_point(family, width, i);
            ThreadEntry {
                color: colors.get(i).copied().unwrap_or_else(|| palette_color(i)),
                start,
                direction,
                seed_side,
                indicator_shift,
            }
        })
        .collect()
}

/// Start knot, entry diagonal, seeded side and indicator placement
///
/// Thread indices run left to right across the indicator row; at every
/// range boundary two consecutive indices share a knot, one per input
/// side.
fn entry_point(
    family: PatternFamily,
    width: usize,
    i: usize,
) -> (KnotIndex, KnotDirection, Option<ThreadSide>, Vector2) {
    match family {
        PatternFamily::L => {
            if i == 0 {
                (
                    [0, 0],
                    KnotDirection::LeftIn,
                    Some(ThreadSide::Left),
                    shift_left(),
                )
            } else if i == 1 {
                (
                    [0, 0],
                    KnotDirection::RightIn,
                    Some(ThreadSide::Right),
                    shift_none(),
                )
            } else {
                // later threads drop onto the knot left of their slot
                (
                    [i - 1, 0],
                    KnotDirection::RightIn,
                    Some(ThreadSide::Left),
                    shift_none(),
                )
            }
        }
        PatternFamily::R => {
            if i < width {
                (
                    [i, 0],
                    KnotDirection::LeftIn,
                    Some(ThreadSide::Left),
                    shift_none(),
                )
            } else {
                (
                    [width - 1, 0],
                    KnotDirection::RightIn,
                    Some(ThreadSide::Right),
                    shift_right(),
                )
            }
        }
        PatternFamily::M => {
            let mid = PatternFamily::middle_column(width);
            if i == 0 {
                (
                    [0, 0],
                    KnotDirection::LeftIn,
                    Some(ThreadSide::Left),
                    shift_left(),
                )
            } else if i == 1 {
                (
                    [0, 0],
                    KnotDirection::RightIn,
                    Some(ThreadSide::Right),
                    shift_none(),
                )
            } else if i <= mid {
                (
                    [i - 1, 0],
                    KnotDirection::RightIn,
                    Some(ThreadSide::Right),
                    shift_none(),
                )
            } else if i < width {
                (
                    [i, 0],
                    KnotDirection::LeftIn,
                    Some(ThreadSide::Left),
                    shift_none(),
                )
            } else {
                (
                    [width - 1, 0],
                    KnotDirection::RightIn,
                    Some(ThreadSide::Right),
                    shift_right(),
                )
            }
        }
        PatternFamily::A => {
            let mid = PatternFamily::middle_column(width);
            if i < mid {
                (
                    [i, 0],
                    KnotDirection::LeftIn,
                    Some(ThreadSide::Left),
                    shift_left(),
                )
            } else if i == mid {
                (
                    [mid, 0],
                    KnotDirection::LeftIn,
                    Some(ThreadSide::Left),
                    shift_left(),
                )
            } else if i == mid + 1 {
                (
                    [mid, 0],
                    KnotDirection::RightIn,
                    Some(ThreadSide::Right),
                    shift_right(),
                )
            } else {
                (
                    [i - 1, 0],
                    KnotDirection::RightIn,
                    Some(ThreadSide::Right),
                    shift_right(),
                )
            }
        }
        PatternFamily::W => {
            let span = PatternFamily::quarter_span(width);
            let (x1, x2, x3, x4) = (span, 2 * span, 3 * span, 4 * span);
            if i == 0 {
                (
                    [0, 0],
                    KnotDirection::LeftIn,
                    Some(ThreadSide::Left),
                    shift_left(),
                )
            } else if i == 1 {
                // the anchor's right side is painted by the walk alone
                ([0, 0], KnotDirection::RightIn, None, shift_none())
            } else if i <= x1 {
                (
                    [i - 1, 0],
                    KnotDirection::RightIn,
                    Some(ThreadSide::Right),
                    shift_none(),
                )
            } else if i <= x2 {
                (
                    [i, 0],
                    KnotDirection::LeftIn,
                    Some(ThreadSide::Left),
                    shift_left_raised(),
                )
            } else if i <= x3 {
                (
                    [i - 1, 0],
                    KnotDirection::RightIn,
                    Some(ThreadSide::Right),
                    shift_right_raised(),
                )
            } else if i <= x4 {
                // entry walks the left diagonal but paints the right
                // side, the only reachable input of these knots
                (
                    [i, 0],
                    KnotDirection::LeftIn,
                    Some(ThreadSide::Right),
                    shift_none(),
                )
            } else {
                (
                    [x4, 0],
                    KnotDirection::RightIn,
                    Some(ThreadSide::Left),
                    shift_right(),
                )
            }
        }
    }
}

/// Default palette assignment per family
///
/// L and R cycle the palette directly; M and A mirror it around the
/// middle; W repeats a symmetric quarter-width run up and down across
/// the four ranges.
pub fn default_colors(family: PatternFamily, width: usize) -> Vec<ThreadColor> {
    let count = PatternFamily::thread_count(width);
    match family {
        PatternFamily::L | PatternFamily::R => (0..count).map(palette_color).collect(),
        PatternFamily::M | PatternFamily::A => (0..count)
            .map(|i| palette_color(i.min(width - i)))
            .collect(),
        PatternFamily::W => {
            let span = PatternFamily::quarter_span(width);
            let (x2, x3, x4) = (2 * span, 3 * span, 4 * span);
            // symmetric repeat: the anchor color twice, then the cycle
            let run = |k: usize| {
                if k <= 1 {
                    palette_color(0)
                } else {
                    palette_color(k - 1)
                }
            };
            (0..count)
                .map(|i| {
                    if i <= span {
                        run(i)
                    } else if i <= x2 + 1 {
                        run(x2 + 1 - i)
                    } else if i <= x3 {
                        run(i - x2)
                    } else {
                        run(x4 + 1 - i)
                    }
                })
                .collect()
        }
    }
}
