//! Document value representation of a pattern
//!
//! Captures the state a pattern cannot regenerate: family, dimensions,
//! thread colors and each knot's mutable kind/visibility pair. Restore
//! rebuilds through the normal construction pipeline, so links, end
//! categories and geometry are regenerated rather than trusted from
//! the payload, then overlays the captured state and re-runs the full
//! two-pass propagation.

use serde::{Deserialize, Serialize};

use crate::algorithm::family::PatternFamily;
use crate::algorithm::pattern::RibbonPattern;
use crate::io::error::Result;
use crate::io::palette::ThreadColor;
use crate::spatial::knot::KnotKind;

/// Persisted state of one knot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnotState {
    /// Routing kind
    pub kind: KnotKind,
    /// Whether the left input is displayed
    pub left_thread_visible: bool,
}

/// Plain value representation of a pattern
///
/// Knot states are stored column-major to match the grid's `[column,
/// row]` indexing. Missing thread colors or knot entries fail soft:
/// the freshly built defaults stay in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternDocument {
    /// Family tag, one of L, R, M, A, W
    pub family: PatternFamily,
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub length: usize,
    /// Per-thread colors in entry order, `width + 1` entries
    #[serde(default)]
    pub thread_colors: Vec<ThreadColor>,
    /// Per-knot state, outer list per column
    #[serde(default)]
    pub knots: Vec<Vec<KnotState>>,
}

impl PatternDocument {
    /// Capture a pattern's persisted state
    pub fn from_pattern(pattern: &RibbonPattern) -> Self {
        let thread_colors = pattern.threads().iter().map(|entry| entry.color).collect();
        let knots = (0..pattern.width())
            .map(|x| {
                (0..pattern.length())
                    .filter_map(|y| pattern.knot([x, y]))
                    .map(|knot| KnotState {
                        kind: knot.kind,
                        left_thread_visible: knot.left_thread_visible,
                    })
                    .collect()
            })
            .collect();

        Self {
            family: pattern.family(),
            width: pattern.width(),
            length: pattern.length(),
            thread_colors,
            knots,
        }
    }

    /// Rebuild a pattern and overlay this document's state
    ///
    /// # Errors
    ///
    /// Returns the construction errors of [`RibbonPattern::new`] for a
    /// family/dimension combination the core rejects, or a propagation
    /// error for a defective topology.
    pub fn restore(&self) -> Result<RibbonPattern> {
        let mut pattern = RibbonPattern::new(self.family, self.width, self.length)?;

        for (index, color) in self.thread_colors.iter().enumerate() {
            pattern.set_thread_color(index, *color);
        }
        for (x, column) in self.knots.iter().enumerate() {
            for (y, state) in column.iter().enumerate() {
                pattern.set_knot_state([x, y], state.kind, state.left_thread_visible);
            }
        }

        pattern.repropagate()?;
        Ok(pattern)
    }

    /// Serialize to the JSON document form
    ///
    /// # Errors
    ///
    /// Propagates serialization failures from `serde_json`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse the JSON document form
    ///
    /// # Errors
    ///
    /// Propagates parse failures from `serde_json`, including unknown
    /// family tags.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
