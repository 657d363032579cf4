//! In-memory RGB canvas and its drawing primitives.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Allocate | `image::RgbImage::from_pixel` |
//! | Border | `imageproc::drawing::draw_hollow_rect_mut`, one call per ring |
//! | Text | [`TextFace::draw`] |
//! | Encode | `image::codecs::png::PngEncoder` into memory |

use super::calculations::border_rings;
use super::params::{BorderParams, Color};
use super::text::TextFace;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageResult, Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Allocate a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background.into()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Stroke an unfilled rectangle; the stroke grows inward from the corners.
    pub fn draw_border(&mut self, border: &BorderParams) {
        let color: Rgb<u8> = border.color.into();
        for ring in border_rings(border.top_left, border.bottom_right, border.stroke) {
            let rect = Rect::at(ring.x, ring.y).of_size(ring.width, ring.height);
            draw_hollow_rect_mut(&mut self.image, rect, color);
        }
    }

    pub fn draw_text(&mut self, face: &impl TextFace, text: &str, origin: (i32, i32), color: Color) {
        face.draw(&mut self.image, text, origin, color.into());
    }

    /// Encode as an RGB8 PNG.
    ///
    /// The encoder's default settings are fixed, so the same pixels always
    /// produce the same bytes.
    pub fn encode_png(&self) -> ImageResult<Vec<u8>> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            self.image.as_raw(),
            self.image.width(),
            self.image.height(),
            ExtendedColorType::Rgb8,
        )?;
        Ok(bytes)
    }
}
