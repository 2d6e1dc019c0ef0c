//! Thread color value type and the preset start palette

use serde::{Deserialize, Serialize};

/// RGB thread color
///
/// Serializes as a `[r, g, b]` triple to match the document schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct ThreadColor {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl ThreadColor {
    /// Create a color from its channels
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl From<[u8; 3]> for ThreadColor {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<ThreadColor> for [u8; 3] {
    fn from(color: ThreadColor) -> Self {
        [color.red, color.green, color.blue]
    }
}

/// Placeholder shown on knot inputs no thread has reached yet
pub const UNDEFINED_COLOR: ThreadColor = ThreadColor::new(211, 211, 211);

/// Preset start colors, cycled by thread index modulo eight
pub const START_PALETTE: [ThreadColor; 8] = [
    ThreadColor::new(255, 99, 71), // tomato
    ThreadColor::new(0, 255, 0),
    ThreadColor::new(0, 191, 255), // deep sky blue
    ThreadColor::new(0, 0, 0),
    ThreadColor::new(0, 255, 255),
    ThreadColor::new(238, 130, 238), // violet
    ThreadColor::new(255, 255, 0),
    ThreadColor::new(169, 169, 169),
];

/// Palette entry for an arbitrary index, wrapping past the palette end
pub fn palette_color(index: usize) -> ThreadColor {
    START_PALETTE
        .get(index % START_PALETTE.len())
        .copied()
        .unwrap_or(UNDEFINED_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles_modulo_eight() {
        assert_eq!(palette_color(0), palette_color(8));
        assert_eq!(palette_color(3), palette_color(11));
        assert_ne!(palette_color(0), palette_color(1));
    }

    #[test]
    fn test_color_round_trips_through_triple() {
        let color = ThreadColor::new(12, 34, 56);
        let triple: [u8; 3] = color.into();
        assert_eq!(ThreadColor::from(triple), color);
    }
}
