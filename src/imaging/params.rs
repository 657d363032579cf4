//! Parameter types for drawing operations.
//!
//! These structs describe *what* to draw, not *how*. The render pipeline
//! builds them from [`LogoConfig`](crate::config::LogoConfig) and hands them
//! to the [`canvas`](super::canvas) primitives.
//!
//! ## Types
//!
//! - [`Color`]: opaque RGB color, parsed from `#rgb`, `#rrggbb` or a name.
//! - [`BorderParams`]: stroked rectangle: corners (inclusive), stroke width, color.

use image::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid color '{0}': expected #rgb, #rrggbb or a color name")]
pub struct ColorParseError(pub String);

/// Opaque RGB color.
///
/// Serialized as `#rrggbb`; accepts a handful of common names on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const BLACK: Color = Color([0, 0, 0]);
    pub const WHITE: Color = Color([255, 255, 255]);
    pub const CYAN: Color = Color([0, 255, 255]);

    fn named(name: &str) -> Option<Self> {
        let rgb = match name {
            "black" => [0, 0, 0],
            "white" => [255, 255, 255],
            "cyan" | "aqua" => [0, 255, 255],
            "red" => [255, 0, 0],
            "green" => [0, 128, 0],
            "lime" => [0, 255, 0],
            "blue" => [0, 0, 255],
            "yellow" => [255, 255, 0],
            "magenta" | "fuchsia" => [255, 0, 255],
            "gray" | "grey" => [128, 128, 128],
            "orange" => [255, 165, 0],
            "purple" => [128, 0, 128],
            _ => return None,
        };
        Some(Self(rgb))
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_ascii_lowercase();
        let err = || ColorParseError(s.to_string());

        let Some(hex) = trimmed.strip_prefix('#') else {
            return Self::named(&trimmed).ok_or_else(err);
        };
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        match hex.len() {
            // #rgb expands each nibble: #0ff → #00ffff
            3 => {
                let mut rgb = [0u8; 3];
                for (slot, c) in rgb.iter_mut().zip(hex.chars()) {
                    let nibble = c.to_digit(16).ok_or_else(err)? as u8;
                    *slot = nibble * 17;
                }
                Ok(Self(rgb))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
                Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
            }
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb(color.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Stroked, unfilled rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderParams {
    /// Corners are inclusive: (50,50)-(750,350) covers 701×301 pixels.
    pub top_left: (u32, u32),
    pub bottom_right: (u32, u32),
    /// Drawn inward from the corners.
    pub stroke: u32,
    pub color: Color,
}
