//! Text faces: measure a string and draw it onto a canvas.
//!
//! The [`TextFace`] trait is the seam between the render pipeline and the
//! glyph source. Two faces implement it:
//!
//! | Face | Source | Rasterization |
//! |---|---|---|
//! | [`ScalableFace`] | TrueType/OpenType file via `ab_glyph` | anti-aliased outlines |
//! | [`BitmapFace`] | built-in 5×7 table | solid scaled blocks |
//!
//! Both measure the *ink* box of the string (what actually gets painted),
//! relative to the point later passed to [`TextFace::draw`].
//!
//! `ScalableFace` lays glyphs out itself instead of calling
//! `imageproc::drawing::draw_text_mut`: centering needs the ink box, and
//! `imageproc::drawing::text_size` only reports the advance box.

use super::bitmap_font::BitmapFace;
use crate::types::TextBounds;
use ab_glyph::{Font, FontVec, GlyphId, OutlinedGlyph, PxScale, Rect, ScaleFont, point};
use image::{Rgb, RgbImage};
use imageproc::pixelops::weighted_sum;
use std::fmt;

/// Anything that can measure and draw a single line of text.
pub trait TextFace {
    /// Ink bounding box of `text`, relative to the draw origin.
    fn measure(&self, text: &str) -> TextBounds;

    /// Draw `text` with its origin at `origin`. Pixels off the canvas are clipped.
    fn draw(&self, canvas: &mut RgbImage, text: &str, origin: (i32, i32), color: Rgb<u8>);
}

/// Outline font at a fixed pixel size.
///
/// The origin is the top of the ascent line at the start of the pen, so the
/// ink usually starts a few pixels right of and below it.
pub struct ScalableFace {
    font: FontVec,
    scale: PxScale,
}

impl ScalableFace {
    pub fn new(font: FontVec, size: f32) -> Self {
        Self {
            font,
            scale: PxScale::from(size),
        }
    }

    /// Position every visible glyph along a single baseline, applying kerning.
    fn layout(&self, text: &str) -> Vec<OutlinedGlyph> {
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = 0.0f32;
        let mut previous: Option<GlyphId> = None;
        let mut glyphs = Vec::new();

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(caret, scaled.ascent()));
            caret += scaled.h_advance(id);
            previous = Some(id);

            // Whitespace has no outline
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                glyphs.push(outlined);
            }
        }

        glyphs
    }
}

impl fmt::Debug for ScalableFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalableFace")
            .field("size", &self.scale.y)
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl TextFace for ScalableFace {
    fn measure(&self, text: &str) -> TextBounds {
        let union = self
            .layout(text)
            .iter()
            .map(OutlinedGlyph::px_bounds)
            .reduce(|a, b| Rect {
                min: point(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
                max: point(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
            });

        match union {
            Some(r) => TextBounds {
                left: r.min.x as i32,
                top: r.min.y as i32,
                width: (r.max.x - r.min.x) as u32,
                height: (r.max.y - r.min.y) as u32,
            },
            None => TextBounds::default(),
        }
    }

    fn draw(&self, canvas: &mut RgbImage, text: &str, origin: (i32, i32), color: Rgb<u8>) {
        let (w, h) = (i64::from(canvas.width()), i64::from(canvas.height()));

        for glyph in self.layout(text) {
            let bb = glyph.px_bounds();
            let x0 = i64::from(origin.0) + bb.min.x as i64;
            let y0 = i64::from(origin.1) + bb.min.y as i64;

            glyph.draw(|gx, gy, coverage| {
                let x = x0 + i64::from(gx);
                let y = y0 + i64::from(gy);
                if x < 0 || y < 0 || x >= w || y >= h {
                    return;
                }
                let coverage = coverage.clamp(0.0, 1.0);
                let pixel = canvas.get_pixel_mut(x as u32, y as u32);
                *pixel = weighted_sum(*pixel, color, 1.0 - coverage, coverage);
            });
        }
    }
}

/// The face a render actually uses.
#[derive(Debug)]
pub enum Typeface {
    Scalable(ScalableFace),
    Bitmap(BitmapFace),
}

impl Typeface {
    /// Short label for reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Typeface::Scalable(_) => "scalable",
            Typeface::Bitmap(_) => "bitmap",
        }
    }
}

impl TextFace for Typeface {
    fn measure(&self, text: &str) -> TextBounds {
        match self {
            Typeface::Scalable(face) => face.measure(text),
            Typeface::Bitmap(face) => face.measure(text),
        }
    }

    fn draw(&self, canvas: &mut RgbImage, text: &str, origin: (i32, i32), color: Rgb<u8>) {
        match self {
            Typeface::Scalable(face) => face.draw(canvas, text, origin, color),
            Typeface::Bitmap(face) => face.draw(canvas, text, origin, color),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Face that records draw calls instead of painting.
    pub struct RecordingFace {
        pub bounds: TextBounds,
        pub draws: RefCell<Vec<RecordedDraw>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedDraw {
        pub text: String,
        pub origin: (i32, i32),
        pub color: Rgb<u8>,
    }

    impl RecordingFace {
        pub fn with_bounds(bounds: TextBounds) -> Self {
            Self {
                bounds,
                draws: RefCell::new(Vec::new()),
            }
        }

        pub fn get_draws(&self) -> Vec<RecordedDraw> {
            self.draws.borrow().clone()
        }
    }

    impl TextFace for RecordingFace {
        fn measure(&self, _text: &str) -> TextBounds {
            self.bounds
        }

        fn draw(&self, _canvas: &mut RgbImage, text: &str, origin: (i32, i32), color: Rgb<u8>) {
            self.draws.borrow_mut().push(RecordedDraw {
                text: text.to_string(),
                origin,
                color,
            });
        }
    }

    #[test]
    fn recording_face_records_draws_in_order() {
        let face = RecordingFace::with_bounds(TextBounds::default());
        let mut canvas = RgbImage::new(1, 1);
        face.draw(&mut canvas, "a", (1, 2), Rgb([1, 1, 1]));
        face.draw(&mut canvas, "b", (3, 4), Rgb([2, 2, 2]));

        let draws = face.get_draws();
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].text, "a");
        assert_eq!(draws[1].origin, (3, 4));
    }

    #[test]
    fn typeface_delegates_to_bitmap() {
        let face = Typeface::Bitmap(BitmapFace::new(2));
        assert_eq!(face.kind(), "bitmap");
        assert_eq!(face.measure("H"), BitmapFace::new(2).measure("H"));

        let mut a = RgbImage::new(30, 30);
        let mut b = RgbImage::new(30, 30);
        face.draw(&mut a, "Hi", (2, 3), Rgb([0, 255, 255]));
        BitmapFace::new(2).draw(&mut b, "Hi", (2, 3), Rgb([0, 255, 255]));
        assert_eq!(a, b);
    }

    fn fixture_face(size: f32) -> ScalableFace {
        let bytes = std::fs::read(crate::test_helpers::fixture_font()).unwrap();
        ScalableFace::new(FontVec::try_from_vec(bytes).unwrap(), size)
    }

    #[test]
    fn scalable_measure_is_below_ascent_line() {
        let bounds = fixture_face(72.0).measure("XiwA-OS");
        // Capitals start below the top of the ascent line and fit in the em
        assert!(bounds.top > 0);
        assert!(bounds.height > 40 && bounds.height <= 72, "height {}", bounds.height);
        assert!(bounds.width > 200, "width {}", bounds.width);
        assert_eq!(fixture_face(72.0).measure(" "), TextBounds::default());
    }

    #[test]
    fn scalable_measure_grows_with_size() {
        let small = fixture_face(36.0).measure("XiwA-OS");
        let large = fixture_face(72.0).measure("XiwA-OS");
        assert!(large.width > small.width && large.height > small.height);
    }

    #[test]
    fn scalable_draw_stays_inside_measured_box() {
        let face = fixture_face(48.0);
        let bounds = face.measure("Xi");
        let origin = (10, 5);
        let mut canvas = RgbImage::new(200, 100);
        face.draw(&mut canvas, "Xi", origin, Rgb([255, 255, 255]));

        let mut painted = 0;
        for (x, y, p) in canvas.enumerate_pixels() {
            if *p == Rgb([0, 0, 0]) {
                continue;
            }
            painted += 1;
            let (x, y) = (x as i32 - origin.0, y as i32 - origin.1);
            assert!(x >= bounds.left && x < bounds.left + bounds.width as i32);
            assert!(y >= bounds.top && y < bounds.top + bounds.height as i32);
        }
        assert!(painted > 0);
    }

    #[test]
    fn scalable_draw_clips_outside_canvas() {
        let face = fixture_face(48.0);
        let mut canvas = RgbImage::new(8, 8);
        face.draw(&mut canvas, "X", (-200, -200), Rgb([255, 255, 255]));
        face.draw(&mut canvas, "X", (500, 500), Rgb([255, 255, 255]));
        assert!(canvas.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn invalid_font_bytes_do_not_parse() {
        assert!(FontVec::try_from_vec(b"not a font".to_vec()).is_err());
    }
}
