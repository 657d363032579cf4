//! Shared test utilities for the xiwa-logo test suite.
//!
//! Provides configs that never touch the real font directories or `/boot`,
//! plus pixel-level lookups for asserting on rendered canvases.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let config = fallback_config(tmp.path());
//! let report = render(&config).unwrap();
//!
//! let image = read_png(&config.output);
//! assert_eq!(ink_box(&image, Rgb([255, 255, 255])), Some((215, 168, 369, 63)));
//! ```

use crate::config::{FontConfig, LogoConfig};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

// =========================================================================
// Config fixtures
// =========================================================================

/// Font config that only looks at `name` itself: no search dirs, no system fonts.
pub fn isolated_font_config(name: &str) -> FontConfig {
    FontConfig {
        name: name.to_string(),
        search_dirs: Vec::new(),
        system_fonts: false,
        ..FontConfig::default()
    }
}

/// Stock logo config that always takes the built-in font and writes into `dir`.
pub fn fallback_config(dir: &Path) -> LogoConfig {
    LogoConfig {
        output: dir.join("boot/xiwa.png"),
        font: isolated_font_config("definitely-not-installed.ttf"),
        ..LogoConfig::default()
    }
}

/// DejaVu Sans, checked in under `fixtures/fonts/`.
pub fn fixture_font() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/fonts/DejaVuSans.ttf")
}

/// Stock logo config that loads the fixture font by path and writes into `dir`.
pub fn scalable_config(dir: &Path) -> LogoConfig {
    let font = fixture_font();
    LogoConfig {
        output: dir.join("boot/xiwa.png"),
        font: isolated_font_config(&font.to_string_lossy()),
        ..LogoConfig::default()
    }
}

// =========================================================================
// Pixel lookups
// =========================================================================

/// Decode a PNG from disk as RGB8. Panics with the path on failure.
pub fn read_png(path: &Path) -> RgbImage {
    image::open(path)
        .unwrap_or_else(|e| panic!("cannot open {}: {e}", path.display()))
        .to_rgb8()
}

/// Bounding box `(x, y, width, height)` of all pixels exactly equal to `color`.
pub fn ink_box(image: &RgbImage, color: Rgb<u8>) -> Option<(u32, u32, u32, u32)> {
    box_where(image, |p| p == color)
}

/// Bounding box `(x, y, width, height)` of all pixels other than `background`.
pub fn non_background_box(image: &RgbImage, background: Rgb<u8>) -> Option<(u32, u32, u32, u32)> {
    box_where(image, |p| p != background)
}

fn box_where(
    image: &RgbImage,
    keep: impl Fn(Rgb<u8>) -> bool,
) -> Option<(u32, u32, u32, u32)> {
    let mut extent: Option<(u32, u32, u32, u32)> = None;
    for (x, y, p) in image.enumerate_pixels() {
        if !keep(*p) {
            continue;
        }
        extent = Some(match extent {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    extent.map(|(x0, y0, x1, y1)| (x0, y0, x1 - x0 + 1, y1 - y0 + 1))
}

/// Count pixels exactly equal to `color`.
pub fn count_pixels(image: &RgbImage, color: Rgb<u8>) -> usize {
    image.pixels().filter(|p| **p == color).count()
}
