//! Pure placement math.
//!
//! All functions here are pure and testable without any I/O or images.

use crate::types::{TextBounds, TextPlacement};

/// Top-left coordinate that centers a box of `inner` size inside `outer`.
///
/// Uses floor division, so an odd leftover pixel goes to the right/bottom
/// and a box larger than the container gets a negative offset.
///
/// # Examples
/// ```
/// # use xiwa_logo::imaging::centered_offset;
/// assert_eq!(centered_offset(800, 371), 214);
/// assert_eq!(centered_offset(10, 13), -2);
/// ```
pub fn centered_offset(outer: u32, inner: u32) -> i32 {
    let diff = i64::from(outer) - i64::from(inner);
    diff.div_euclid(2) as i32
}

/// Center measured text on a canvas.
///
/// The ink box lands at the centered position; the draw origin is shifted
/// back by the box's offset from the origin.
pub fn center_text(canvas: (u32, u32), bounds: TextBounds) -> TextPlacement {
    let x = centered_offset(canvas.0, bounds.width);
    let y = centered_offset(canvas.1, bounds.height);
    TextPlacement {
        ink: (x, y),
        origin: (x.saturating_sub(bounds.left), y.saturating_sub(bounds.top)),
        bounds,
    }
}

/// Draw positions for the outline halo, in drawing order.
///
/// For each offset `1..=radius`: left, right, up, down.
pub fn outline_offsets(origin: (i32, i32), radius: u32) -> Vec<(i32, i32)> {
    let (x, y) = origin;
    let radius = i32::try_from(radius).unwrap_or(i32::MAX);
    (1..=radius)
        .flat_map(|d| {
            [
                (x.saturating_sub(d), y),
                (x.saturating_add(d), y),
                (x, y.saturating_sub(d)),
                (x, y.saturating_add(d)),
            ]
        })
        .collect()
}

/// A one-pixel rectangle ring, corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Split a stroked rectangle into nested one-pixel rings, drawn inward.
///
/// Returns fewer rings than `stroke` when the rectangle is too small to
/// hold them all.
pub fn border_rings(top_left: (u32, u32), bottom_right: (u32, u32), stroke: u32) -> Vec<Ring> {
    let width = bottom_right.0.saturating_sub(top_left.0) + 1;
    let height = bottom_right.1.saturating_sub(top_left.1) + 1;

    (0..stroke)
        .take_while(|i| 2 * i < width && 2 * i < height)
        .map(|i| Ring {
            x: (top_left.0 + i) as i32,
            y: (top_left.1 + i) as i32,
            width: width - 2 * i,
            height: height - 2 * i,
        })
        .collect()
}
