//! Imaging layer: canvas, fonts, text and placement math.
//!
//! | Concern | Crate / function |
//! |---|---|
//! | **Canvas + PNG** | `image` (`RgbImage`, `PngEncoder`) |
//! | **Border** | `imageproc::drawing::draw_hollow_rect_mut` |
//! | **Outline fonts** | `ab_glyph` outlines, blended with `imageproc::pixelops` |
//! | **Fallback font** | built-in 5×7 bitmap table |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for centering and stroke geometry (unit testable)
//! - **Parameters**: Colors and shape descriptions
//! - **Text**: [`TextFace`] trait + [`ScalableFace`] / [`BitmapFace`]
//! - **Font**: name resolution and the [`FontLoad`] fallback branch
//! - **Canvas**: drawing primitives and encoding

mod bitmap_font;
mod calculations;
pub mod canvas;
pub mod font;
mod params;
pub mod text;

pub use bitmap_font::BitmapFace;
pub use calculations::{Ring, border_rings, center_text, centered_offset, outline_offsets};
pub use canvas::Canvas;
pub use font::{FontLoad, FontLoadError, load_font};
pub use params::{BorderParams, Color, ColorParseError};
pub use text::{ScalableFace, TextFace, Typeface};
