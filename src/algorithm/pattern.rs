//! The ribbon pattern aggregate
//!
//! Owns the knot grid, the thread entries and the computed layout, and
//! exposes the mutation operations external command layers build undo
//! on top of. Every operation returns the pre-state it replaced so a
//! caller can invert it; the pattern itself keeps no history.

use crate::algorithm::builder::build_family;
use crate::algorithm::family::PatternFamily;
use crate::algorithm::propagation::{propagate_all, propagate_entry};
use crate::algorithm::threads::{ThreadEntry, thread_entries};
use crate::io::configuration::{INDICATOR_SIZE, KNOT_DIAMETER, PITCH};
use crate::io::error::{PatternError, Result};
use crate::io::palette::ThreadColor;
use crate::math::points::KnotPoints;
use crate::math::vector::Vector2;
use crate::spatial::grid::KnotGrid;
use crate::spatial::knot::{Knot, KnotIndex, KnotKind};
use crate::spatial::layout::{KnotSketch, LayoutMetrics, assign_positions};

/// Endpoints of the connector from a color indicator to its start knot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreadConnector {
    /// Center of the color indicator
    pub indicator: Vector2,
    /// Center of the thread's start knot
    pub knot: Vector2,
}

/// A built ribbon pattern: topology, threads and layout
#[derive(Debug, Clone, PartialEq)]
pub struct RibbonPattern {
    family: PatternFamily,
    grid: KnotGrid,
    threads: Vec<ThreadEntry>,
    metrics: LayoutMetrics,
}

impl RibbonPattern {
    /// Build a pattern from a family and grid dimensions
    ///
    /// Wires the family's topology, lays out the knots, seeds the
    /// start-knot inputs and runs the two-pass propagation for every
    /// thread. Construction is all-or-nothing; no partially built
    /// pattern is observable.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidDimension`] or
    /// [`PatternError::InvalidParity`] for dimensions the family
    /// cannot host.
    pub fn new(family: PatternFamily, width: usize, length: usize) -> Result<Self> {
        family.validate(width, length)?;

        let mut grid = KnotGrid::new(width, length)?;
        build_family(&mut grid, family)?;
        let metrics = assign_positions(&mut grid, family);
        let threads = thread_entries(family, width);

        let mut pattern = Self {
            family,
            grid,
            threads,
            metrics,
        };
        pattern.seed_start_inputs();
        pattern.repropagate()?;
        Ok(pattern)
    }

    /// Family this pattern was built for
    pub const fn family(&self) -> PatternFamily {
        self.family
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Number of rows
    pub fn length(&self) -> usize {
        self.grid.length()
    }

    /// Overall bounding width of the laid-out pattern
    pub const fn pattern_width(&self) -> f64 {
        self.metrics.pattern_width
    }

    /// Overall bounding height of the laid-out pattern
    pub const fn pattern_height(&self) -> f64 {
        self.metrics.pattern_height
    }

    /// The knot grid
    pub const fn grid(&self) -> &KnotGrid {
        &self.grid
    }

    /// Knot at `[column, row]`, if in range
    pub fn knot(&self, index: KnotIndex) -> Option<&Knot> {
        self.grid.get(index)
    }

    /// The configured threads, in entry order
    pub fn threads(&self) -> &[ThreadEntry] {
        &self.threads
    }

    /// Renderer-facing summary of one knot
    pub fn sketch(&self, index: KnotIndex) -> Option<KnotSketch> {
        self.grid.get(index).map(KnotSketch::of)
    }

    /// Relative entry, exit and arc geometry shared by every knot
    ///
    /// Combine with a sketch's position to place thread segments and
    /// the edge return arcs.
    pub fn knot_points(&self) -> KnotPoints {
        KnotPoints::new(KNOT_DIAMETER, PITCH)
    }

    /// Connector endpoints from a thread's color indicator to its knot
    pub fn thread_connector(&self, index: usize) -> Option<ThreadConnector> {
        let entry = self.threads.get(index)?;
        let start = self.grid.get(entry.start)?;
        let half_indicator = Vector2::new(INDICATOR_SIZE / 2.0, INDICATOR_SIZE / 2.0);
        let half_knot = Vector2::new(KNOT_DIAMETER / 2.0, KNOT_DIAMETER / 2.0);
        Some(ThreadConnector {
            indicator: start.position + entry.indicator_shift + half_indicator,
            knot: start.position + half_knot,
        })
    }

    /// Flip which input side a knot displays
    ///
    /// Only the derived display color changes; no re-walk is needed.
    /// Returns the previous flag for the caller's undo record.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::KnotOutOfRange`] for an index outside
    /// the grid; indices are a caller contract.
    pub fn toggle_visibility(&mut self, index: KnotIndex) -> Result<bool> {
        let knot = self
            .grid
            .get_mut(index)
            .ok_or(PatternError::KnotOutOfRange { position: index })?;
        let previous = knot.left_thread_visible;
        knot.left_thread_visible = !previous;
        Ok(previous)
    }

    /// Flip a knot between crossing and returning
    ///
    /// The flip reroutes both colors passing through this knot, so the
    /// two-pass propagation is re-run for every thread. Returns the
    /// previous kind for the caller's undo record.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::KnotOutOfRange`] for an index outside
    /// the grid, or a propagation error for a defective topology.
    pub fn toggle_kind(&mut self, index: KnotIndex) -> Result<KnotKind> {
        let knot = self
            .grid
            .get_mut(index)
            .ok_or(PatternError::KnotOutOfRange { position: index })?;
        let previous = knot.kind;
        knot.kind = previous.toggled();
        self.repropagate()?;
        Ok(previous)
    }

    /// Replace a thread's color and re-walk that thread
    ///
    /// Other threads keep their colors; wherever their paths share
    /// knots with this thread, the re-walk overwrites the touched
    /// inputs. Returns the previous color for the caller's undo
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::ThreadOutOfRange`] for an index past
    /// the entry list, or a propagation error for a defective
    /// topology.
    pub fn recolor_thread(&mut self, index: usize, color: ThreadColor) -> Result<ThreadColor> {
        let count = self.threads.len();
        let entry = self
            .threads
            .get_mut(index)
            .ok_or(PatternError::ThreadOutOfRange { index, count })?;
        let previous = entry.color;
        entry.color = color;

        let entry = self
            .threads
            .get(index)
            .cloned()
            .ok_or(PatternError::ThreadOutOfRange { index, count })?;
        propagate_entry(&mut self.grid, &entry)?;
        Ok(previous)
    }

    /// Run the two-pass propagation for every thread
    ///
    /// # Errors
    ///
    /// Propagates walk failures; both indicate a defective topology.
    pub fn repropagate(&mut self) -> Result<()> {
        propagate_all(&mut self.grid, &self.threads)
    }

    /// Paint each entry's seeded start input
    ///
    /// Applied once at construction before any walk, in entry order.
    fn seed_start_inputs(&mut self) {
        for entry in &self.threads {
            let Some(side) = entry.seed_side else {
                continue;
            };
            if let Some(knot) = self.grid.get_mut(entry.start) {
                knot.record_input(side.entry_direction(), entry.color);
            }
        }
    }

    /// Overwrite one thread's color without re-walking
    ///
    /// Used by document restore, which walks everything afterwards.
    pub(crate) fn set_thread_color(&mut self, index: usize, color: ThreadColor) {
        if let Some(entry) = self.threads.get_mut(index) {
            entry.color = color;
        }
    }

    /// Overwrite one knot's mutable state without re-walking
    ///
    /// Used by document restore, which walks everything afterwards.
    pub(crate) fn set_knot_state(&mut self, index: KnotIndex, kind: KnotKind, left_visible: bool) {
        if let Some(knot) = self.grid.get_mut(index) {
            knot.kind = kind;
            knot.left_thread_visible = left_visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::palette::palette_color;

    #[test]
    fn test_construction_rejects_bad_dimensions() {
        assert!(RibbonPattern::new(PatternFamily::L, 0, 3).is_err());
        assert!(RibbonPattern::new(PatternFamily::M, 6, 3).is_err());
        assert!(RibbonPattern::new(PatternFamily::W, 12, 3).is_err());
        assert!(RibbonPattern::new(PatternFamily::L, 5, 3).is_ok());
    }

    #[test]
    fn test_toggle_visibility_returns_previous_and_inverts() {
        let mut pattern = RibbonPattern::new(PatternFamily::L, 5, 3).unwrap();
        let before = pattern.knot([1, 1]).unwrap().left_thread_visible;
        assert_eq!(pattern.toggle_visibility([1, 1]), Ok(before));
        assert_eq!(pattern.knot([1, 1]).unwrap().left_thread_visible, !before);

        // a second toggle restores the original state
        assert_eq!(pattern.toggle_visibility([1, 1]), Ok(!before));
        assert_eq!(pattern.knot([1, 1]).unwrap().left_thread_visible, before);
    }

    #[test]
    fn test_out_of_range_mutations_are_errors() {
        let mut pattern = RibbonPattern::new(PatternFamily::L, 5, 3).unwrap();
        assert!(matches!(
            pattern.toggle_visibility([9, 0]),
            Err(PatternError::KnotOutOfRange { position: [9, 0] })
        ));
        assert!(pattern.toggle_kind([0, 9]).is_err());
        assert!(matches!(
            pattern.recolor_thread(99, palette_color(0)),
            Err(PatternError::ThreadOutOfRange { index: 99, count: 6 })
        ));
    }

    #[test]
    fn test_connector_spans_indicator_to_knot_center() {
        let pattern = RibbonPattern::new(PatternFamily::L, 5, 3).unwrap();
        let connector = pattern.thread_connector(0).unwrap();
        let start = pattern.knot([0, 0]).unwrap().position;

        assert!((connector.knot.x - (start.x + KNOT_DIAMETER / 2.0)).abs() < 1e-9);
        assert!((connector.knot.y - (start.y + KNOT_DIAMETER / 2.0)).abs() < 1e-9);
        // thread 0's indicator hangs up and to the left
        assert!(connector.indicator.x < connector.knot.x);
        assert!(connector.indicator.y < connector.knot.y);
    }
}
