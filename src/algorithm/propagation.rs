//! Thread color propagation through the link graph
//!
//! A walk starts at a thread's entry knot and follows the directed
//! links until an exit is closed. At every knot it records the color
//! on the matching input side; the knot's displayed color is derived
//! from whichever side is visible. The walk is an explicit loop over
//! `(knot, direction)` state so long ribbons cannot exhaust the stack.

use crate::algorithm::threads::ThreadEntry;
use crate::io::error::{PatternError, Result};
use crate::spatial::grid::KnotGrid;
use crate::spatial::knot::{EndKnotKind, KnotDirection, KnotKind};

/// Exit diagonal a knot routes an entry to
///
/// A crossing knot sends the left entry out to the right and vice
/// versa; a reverse knot returns each entry to its own side.
pub(crate) const fn outgoing(kind: KnotKind, incoming: KnotDirection) -> KnotDirection {
    match (kind, incoming) {
        (KnotKind::Normal, KnotDirection::LeftIn) | (KnotKind::Reverse, KnotDirection::RightIn) => {
            KnotDirection::RightOut
        }
        (KnotKind::Normal, KnotDirection::RightIn) | (KnotKind::Reverse, KnotDirection::LeftIn) => {
            KnotDirection::LeftOut
        }
        // walks only ever present entry diagonals
        (_, passthrough) => passthrough,
    }
}

/// Entry diagonal at the neighbor after a straight hop
///
/// A thread leaving to the right arrives at the next knot on its
/// upper-left diagonal.
const fn crossed_entry(exit: KnotDirection) -> KnotDirection {
    match exit {
        KnotDirection::RightOut => KnotDirection::LeftIn,
        KnotDirection::LeftOut => KnotDirection::RightIn,
        passthrough => passthrough,
    }
}

/// Entry diagonal at the neighbor after an edge return arc
///
/// The arc wraps around the edge, so the thread re-enters the next row
/// on the same side it left from.
const fn arc_entry(exit: KnotDirection) -> KnotDirection {
    match exit {
        KnotDirection::RightOut => KnotDirection::RightIn,
        KnotDirection::LeftOut => KnotDirection::LeftIn,
        passthrough => passthrough,
    }
}

/// Walk one thread from its entry until it stops
///
/// # Errors
///
/// Returns [`PatternError::BrokenLink`] when a non-terminal knot lacks
/// the link the walk needs, and [`PatternError::WalkDidNotTerminate`]
/// if the walk outlives the grid size; both indicate a defective
/// topology, never a normal stop.
pub(crate) fn walk_thread(grid: &mut KnotGrid, entry: &ThreadEntry) -> Result<()> {
    let limit = grid.width() * grid.length();
    let color = entry.color;
    let mut index = entry.start;
    let mut direction = entry.direction;

    for _ in 0..limit {
        let knot = grid
            .get_mut(index)
            .ok_or(PatternError::BrokenLink {
                position: index,
                direction,
            })?;

        knot.record_input(direction, color);
        let exit = outgoing(knot.kind, direction);

        if knot.is_end_row {
            let end_kind = knot.end_kind.unwrap_or(EndKnotKind::None);
            if !end_kind.allows_exit(exit) {
                return Ok(());
            }
            let Some(next) = knot.exit_link(exit) else {
                return Err(PatternError::BrokenLink {
                    position: index,
                    direction: exit,
                });
            };
            direction = crossed_entry(exit);
            index = next;
        } else {
            let Some(next) = knot.exit_link(exit) else {
                return Err(PatternError::BrokenLink {
                    position: index,
                    direction: exit,
                });
            };
            let arc_hop = (knot.is_edge_right && matches!(exit, KnotDirection::RightOut))
                || (knot.is_edge_left && matches!(exit, KnotDirection::LeftOut));
            direction = if arc_hop {
                arc_entry(exit)
            } else {
                crossed_entry(exit)
            };
            index = next;
        }
    }

    Err(PatternError::WalkDidNotTerminate { limit })
}

/// Run every thread's walk twice, in entry order
///
/// Row-0 anchor knots are entered by two adjacent threads; the first
/// pass leaves whichever anchor input the later thread owns unset, so
/// the whole list is walked a second time. The second pass is a full
/// re-walk, not a patch of the shared anchors.
///
/// # Errors
///
/// Propagates the first walk failure; see [`walk_thread`].
pub fn propagate_all(grid: &mut KnotGrid, entries: &[ThreadEntry]) -> Result<()> {
    for _ in 0..2 {
        for entry in entries {
            walk_thread(grid, entry)?;
        }
    }
    Ok(())
}

/// Run a single thread's walk twice
///
/// # Errors
///
/// Propagates the first walk failure; see [`walk_thread`].
pub fn propagate_entry(grid: &mut KnotGrid, entry: &ThreadEntry) -> Result<()> {
    walk_thread(grid, entry)?;
    walk_thread(grid, entry)
}
