//! Knot records and the direction/kind vocabulary of the weave

use serde::{Deserialize, Serialize};

use crate::io::palette::{ThreadColor, UNDEFINED_COLOR};
use crate::math::vector::Vector2;

/// Index of a knot inside its owning grid, as `[column, row]`
pub type KnotIndex = [usize; 2];

/// Diagonal along which a thread enters or leaves a knot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnotDirection {
    /// Entering on the upper-left diagonal
    LeftIn,
    /// Entering on the upper-right diagonal
    RightIn,
    /// Leaving on the lower-left diagonal
    LeftOut,
    /// Leaving on the lower-right diagonal
    RightOut,
}

impl KnotDirection {
    /// Whether this is one of the two entry diagonals
    pub const fn is_input(self) -> bool {
        matches!(self, Self::LeftIn | Self::RightIn)
    }
}

/// One of a knot's two input sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadSide {
    /// The upper-left diagonal
    Left,
    /// The upper-right diagonal
    Right,
}

impl ThreadSide {
    /// Entry direction arriving on this side
    pub const fn entry_direction(self) -> KnotDirection {
        match self {
            Self::Left => KnotDirection::LeftIn,
            Self::Right => KnotDirection::RightIn,
        }
    }
}

/// How a knot routes an incoming diagonal to an outgoing one
///
/// `Normal` crosses the threads (left entry leaves right), `Reverse`
/// returns each thread to its own side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KnotKind {
    /// Crossing knot
    #[default]
    Normal,
    /// Returning knot, used on seam columns
    Reverse,
}

impl KnotKind {
    /// The other kind
    pub const fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Reverse,
            Self::Reverse => Self::Normal,
        }
    }
}

/// Exit category of a knot in the last row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndKnotKind {
    /// No exits; every thread terminates here
    None,
    /// Only the lower-right exit survives
    LikeL,
    /// Only the lower-left exit survives
    LikeR,
    /// Both exits survive (A-family seam and the W-family middle seam)
    Both,
}

impl EndKnotKind {
    /// Whether a terminal knot of this category offers the given exit
    pub const fn allows_exit(self, direction: KnotDirection) -> bool {
        match direction {
            KnotDirection::LeftOut => matches!(self, Self::LikeR | Self::Both),
            KnotDirection::RightOut => matches!(self, Self::LikeL | Self::Both),
            KnotDirection::LeftIn | KnotDirection::RightIn => false,
        }
    }
}

/// One crossing point of the weave grid
///
/// Links are indices into the owning grid, never owning references;
/// several threads may traverse the same knot and must observe shared
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct Knot {
    /// Knot sits in row 0
    pub is_start_row: bool,
    /// Knot sits in the last row
    pub is_end_row: bool,
    /// Knot sits in column 0
    pub is_edge_left: bool,
    /// Knot sits in the last column
    pub is_edge_right: bool,
    /// Current routing kind
    pub kind: KnotKind,
    /// Exit category; set for last-row knots only
    pub end_kind: Option<EndKnotKind>,
    /// Whether the displayed color comes from the left input
    pub left_thread_visible: bool,
    /// Last color received on the upper-left diagonal
    pub color_in_left: ThreadColor,
    /// Last color received on the upper-right diagonal
    pub color_in_right: ThreadColor,
    /// Knot reached by leaving on the lower-left diagonal
    pub link_to_left_exit: Option<KnotIndex>,
    /// Knot reached by leaving on the lower-right diagonal
    pub link_to_right_exit: Option<KnotIndex>,
    /// Draw-space coordinate of the knot's top-left corner
    pub position: Vector2,
}

impl Knot {
    /// Create a knot with its fixed structural flags
    pub const fn new(
        is_start_row: bool,
        is_end_row: bool,
        is_edge_left: bool,
        is_edge_right: bool,
    ) -> Self {
        Self {
            is_start_row,
            is_end_row,
            is_edge_left,
            is_edge_right,
            kind: KnotKind::Normal,
            end_kind: None,
            left_thread_visible: true,
            color_in_left: UNDEFINED_COLOR,
            color_in_right: UNDEFINED_COLOR,
            link_to_left_exit: None,
            link_to_right_exit: None,
            position: Vector2::new(0.0, 0.0),
        }
    }

    /// Record a color arriving on an entry diagonal
    ///
    /// Exit directions are ignored; walks only ever record inputs.
    pub const fn record_input(&mut self, direction: KnotDirection, color: ThreadColor) {
        match direction {
            KnotDirection::LeftIn => self.color_in_left = color,
            KnotDirection::RightIn => self.color_in_right = color,
            KnotDirection::LeftOut | KnotDirection::RightOut => {}
        }
    }

    /// Color this knot currently displays
    pub const fn displayed_color(&self) -> ThreadColor {
        if self.left_thread_visible {
            self.color_in_left
        } else {
            self.color_in_right
        }
    }

    /// Link for an exit diagonal, if wired
    pub const fn exit_link(&self, direction: KnotDirection) -> Option<KnotIndex> {
        match direction {
            KnotDirection::LeftOut => self.link_to_left_exit,
            KnotDirection::RightOut => self.link_to_right_exit,
            KnotDirection::LeftIn | KnotDirection::RightIn => None,
        }
    }
}
