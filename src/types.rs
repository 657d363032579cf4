//! Shared geometry types.
//!
//! These are produced by the imaging layer, carried through the render
//! pipeline and serialized into the JSON render report.

use serde::{Deserialize, Serialize};

/// Ink bounding box of a string under a face, relative to the draw origin.
///
/// `left`/`top` may be negative (glyphs overhanging the origin) and are
/// usually positive for outline fonts, whose origin sits at the top of the
/// ascent line rather than at the top of the ink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl TextBounds {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Where the label goes on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPlacement {
    /// Top-left of the ink box on the canvas.
    pub ink: (i32, i32),
    /// Point handed to the text drawing calls.
    pub origin: (i32, i32),
    pub bounds: TextBounds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_are_empty() {
        assert!(TextBounds::default().is_empty());
    }

    #[test]
    fn zero_height_is_empty() {
        let bounds = TextBounds {
            left: 0,
            top: 0,
            width: 10,
            height: 0,
        };
        assert!(bounds.is_empty());
    }
}
