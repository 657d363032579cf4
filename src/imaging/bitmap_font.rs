//! Built-in 5×7 bitmap face, used when no outline font can be loaded.
//!
//! Covers printable ASCII (`' '..='~'`). Each row is five bits, the 0x10 bit
//! being the leftmost column. Anything outside the table draws as `?`.

use super::text::TextFace;
use crate::types::TextBounds;
use image::{Rgb, RgbImage};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal cell size: glyph plus one blank column.
const ADVANCE: u32 = GLYPH_WIDTH + 1;

const FIRST: char = ' ';
const LAST: char = '~';

#[rustfmt::skip]
const GLYPHS: [[u8; 7]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x04, 0x04, 0x04, 0x04, 0x00, 0x00, 0x04], // !
    [0x0A, 0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00], // "
    [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A], // #
    [0x04, 0x0F, 0x14, 0x0E, 0x05, 0x1E, 0x04], // $
    [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03], // %
    [0x0C, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0D], // &
    [0x0C, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00], // '
    [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02], // (
    [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08], // )
    [0x00, 0x04, 0x15, 0x0E, 0x15, 0x04, 0x00], // *
    [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00], // +
    [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08], // ,
    [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00], // -
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C], // .
    [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00], // /
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
    [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00], // :
    [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x04, 0x08], // ;
    [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02], // <
    [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00], // =
    [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08], // >
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04], // ?
    [0x0E, 0x11, 0x01, 0x0D, 0x15, 0x15, 0x0E], // @
    [0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
    [0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E], // [
    [0x00, 0x10, 0x08, 0x04, 0x02, 0x01, 0x00], // \
    [0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E], // ]
    [0x04, 0x0A, 0x11, 0x00, 0x00, 0x00, 0x00], // ^
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F], // _
    [0x08, 0x04, 0x02, 0x00, 0x00, 0x00, 0x00], // `
    [0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F], // a
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x1E], // b
    [0x00, 0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E], // c
    [0x01, 0x01, 0x0D, 0x13, 0x11, 0x11, 0x0F], // d
    [0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E], // e
    [0x06, 0x09, 0x08, 0x1C, 0x08, 0x08, 0x08], // f
    [0x00, 0x0F, 0x11, 0x11, 0x0F, 0x01, 0x0E], // g
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11], // h
    [0x04, 0x00, 0x0C, 0x04, 0x04, 0x04, 0x0E], // i
    [0x02, 0x00, 0x06, 0x02, 0x02, 0x12, 0x0C], // j
    [0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12], // k
    [0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // l
    [0x00, 0x00, 0x1A, 0x15, 0x15, 0x11, 0x11], // m
    [0x00, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11], // n
    [0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E], // o
    [0x00, 0x00, 0x1E, 0x11, 0x1E, 0x10, 0x10], // p
    [0x00, 0x00, 0x0D, 0x13, 0x0F, 0x01, 0x01], // q
    [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10], // r
    [0x00, 0x00, 0x0E, 0x10, 0x0E, 0x01, 0x1E], // s
    [0x08, 0x08, 0x1C, 0x08, 0x08, 0x09, 0x06], // t
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0D], // u
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x0A, 0x04], // v
    [0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0A], // w
    [0x00, 0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11], // x
    [0x00, 0x00, 0x11, 0x11, 0x0F, 0x01, 0x0E], // y
    [0x00, 0x00, 0x1F, 0x02, 0x04, 0x08, 0x1F], // z
    [0x02, 0x04, 0x04, 0x08, 0x04, 0x04, 0x02], // {
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // |
    [0x08, 0x04, 0x04, 0x02, 0x04, 0x04, 0x08], // }
    [0x00, 0x00, 0x08, 0x15, 0x02, 0x00, 0x00], // ~
];

fn glyph(c: char) -> &'static [u8; 7] {
    let c = if (FIRST..=LAST).contains(&c) { c } else { '?' };
    &GLYPHS[(c as u32 - FIRST as u32) as usize]
}

/// Bitmap face with integer pixel scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFace {
    /// Canvas pixels per font pixel, at least 1.
    pub pixel: u32,
}

impl BitmapFace {
    pub fn new(pixel: u32) -> Self {
        Self {
            pixel: pixel.max(1),
        }
    }

    /// Pick the block size that brings the 8-pixel cell closest to `size` pixels.
    pub fn for_size(size: f32) -> Self {
        let pixel = if size.is_finite() {
            (size / 8.0).round().max(1.0) as u32
        } else {
            1
        };
        Self::new(pixel)
    }
}

/// Lit font pixels of `text`, in font units relative to the origin.
fn lit(text: &str) -> impl Iterator<Item = (u32, u32)> + '_ {
    text.chars().enumerate().flat_map(|(i, c)| {
        let rows = glyph(c);
        let x0 = i as u32 * ADVANCE;
        (0..GLYPH_HEIGHT).flat_map(move |row| {
            (0..GLYPH_WIDTH)
                .filter(move |&col| rows[row as usize] & (0x10 >> col) != 0)
                .map(move |col| (x0 + col, row))
        })
    })
}

impl TextFace for BitmapFace {
    fn measure(&self, text: &str) -> TextBounds {
        let mut extent: Option<(u32, u32, u32, u32)> = None;
        for (x, y) in lit(text) {
            extent = Some(match extent {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }

        let Some((x0, y0, x1, y1)) = extent else {
            return TextBounds::default();
        };
        // Saturate rather than wrap for absurd block sizes
        let scale = |units: u32| units.saturating_mul(self.pixel);
        TextBounds {
            left: i32::try_from(scale(x0)).unwrap_or(i32::MAX),
            top: i32::try_from(scale(y0)).unwrap_or(i32::MAX),
            width: scale(x1 - x0 + 1),
            height: scale(y1 - y0 + 1),
        }
    }

    fn draw(&self, canvas: &mut RgbImage, text: &str, origin: (i32, i32), color: Rgb<u8>) {
        let (w, h) = (canvas.width() as i64, canvas.height() as i64);
        let px = i64::from(self.pixel);

        for (fx, fy) in lit(text) {
            let bx = i64::from(origin.0) + i64::from(fx) * px;
            let by = i64::from(origin.1) + i64::from(fy) * px;
            for y in by.max(0)..(by + px).min(h) {
                for x in bx.max(0)..(bx + px).min(w) {
                    canvas.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_printable_ascii() {
        assert_eq!(GLYPHS.len(), (LAST as usize) - (FIRST as usize) + 1);
    }

    #[test]
    fn unknown_chars_render_as_question_mark() {
        assert_eq!(glyph('é'), glyph('?'));
        assert_eq!(glyph('\n'), glyph('?'));
    }

    #[test]
    fn for_size_scales_cell_to_requested_size() {
        assert_eq!(BitmapFace::for_size(72.0).pixel, 9);
        assert_eq!(BitmapFace::for_size(8.0).pixel, 1);
        assert_eq!(BitmapFace::for_size(1.0).pixel, 1);
        assert_eq!(BitmapFace::for_size(f32::NAN).pixel, 1);
    }

    #[test]
    fn measure_single_full_glyph() {
        // 'H' lights all 5 columns and 7 rows
        let bounds = BitmapFace::new(1).measure("H");
        assert_eq!(
            bounds,
            TextBounds {
                left: 0,
                top: 0,
                width: 5,
                height: 7
            }
        );
    }

    #[test]
    fn measure_uses_ink_not_cell() {
        // '-' only lights row 3
        let bounds = BitmapFace::new(2).measure("-");
        assert_eq!(
            bounds,
            TextBounds {
                left: 0,
                top: 6,
                width: 10,
                height: 2
            }
        );
    }

    #[test]
    fn measure_logo_label() {
        // 7 cells of 6 columns minus the trailing blank column; X..S span rows 0..=6
        let bounds = BitmapFace::new(9).measure("XiwA-OS");
        assert_eq!(bounds.left, 0);
        assert_eq!(bounds.top, 0);
        assert_eq!(bounds.width, (7 * 6 - 1) * 9);
        assert_eq!(bounds.height, 7 * 9);
    }

    #[test]
    fn measure_saturates_instead_of_overflowing() {
        let bounds = BitmapFace::for_size(1e10).measure("XiwA-OS");
        assert_eq!(bounds.width, u32::MAX);
        assert_eq!(bounds.height, u32::MAX);
        assert_eq!(bounds.left, 0);
    }

    #[test]
    fn measure_blank_text_is_empty() {
        assert!(BitmapFace::new(3).measure("   ").is_empty());
        assert!(BitmapFace::new(3).measure("").is_empty());
    }

    #[test]
    fn draw_fills_scaled_blocks() {
        let mut canvas = RgbImage::new(20, 20);
        let white = Rgb([255, 255, 255]);
        BitmapFace::new(2).draw(&mut canvas, ".", (1, 1), white);

        // '.' lights cols 1..=2, rows 5..=6 → canvas x 3..=6, y 11..=14
        for y in 0..20 {
            for x in 0..20 {
                let inside = (3..=6).contains(&x) && (11..=14).contains(&y);
                let expected = if inside { white } else { Rgb([0, 0, 0]) };
                assert_eq!(*canvas.get_pixel(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn draw_clips_outside_canvas() {
        let mut canvas = RgbImage::new(4, 4);
        BitmapFace::new(3).draw(&mut canvas, "H", (-5, -5), Rgb([255, 0, 0]));
        BitmapFace::new(3).draw(&mut canvas, "H", (100, 100), Rgb([255, 0, 0]));
        // Every lit block lands left of, right of or below the 4x4 canvas
        assert!(canvas.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }
}
