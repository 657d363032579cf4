//! Logo configuration module.
//!
//! Every style constant of the logo lives here, together with the output
//! path. Configuration is layered: stock defaults are overridden by an
//! optional `logo.toml`, which in turn is overridden by CLI flags.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output = "/boot/xiwa.png"  # Where the PNG is written
//!
//! [canvas]
//! width = 800
//! height = 400
//! background = "black"
//!
//! [border]
//! color = "cyan"
//! width = 3                  # Stroke width, drawn inward
//! top_left = [50, 50]        # Inclusive corner
//! bottom_right = [750, 350]  # Inclusive corner
//!
//! [text]
//! label = "XiwA-OS"
//! fill = "white"
//!
//! [text.outline]
//! color = "cyan"
//! radius = 3                 # Halo passes at offsets 1..=radius
//!
//! [font]
//! name = "arial.ttf"         # File name (searched) or path
//! size = 72.0                # Pixel size
//! search_dirs = []           # Extra directories, searched first
//! system_fonts = true        # Also search platform font directories
//! ```
//!
//! Colors accept `#rgb`, `#rrggbb` or a common name. Unknown keys are
//! rejected to catch typos early.

use crate::imaging::{BorderParams, Color};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// `font.size` may be at most this many canvas heights.
const MAX_FONT_HEIGHT_RATIO: f32 = 4.0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Logo configuration.
///
/// All fields have defaults reproducing the stock boot logo. Config files
/// need only specify the values they want to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogoConfig {
    /// Destination PNG. Missing parent directories are created.
    pub output: PathBuf,
    pub canvas: CanvasConfig,
    pub border: BorderConfig,
    pub text: TextConfig,
    pub font: FontConfig,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("/boot/xiwa.png"),
            canvas: CanvasConfig::default(),
            border: BorderConfig::default(),
            text: TextConfig::default(),
            font: FontConfig::default(),
        }
    }
}

impl LogoConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Validation(msg.into()));

        if self.output.as_os_str().is_empty() {
            return invalid("output must not be empty");
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return invalid("canvas.width and canvas.height must be non-zero");
        }

        let [x0, y0] = self.border.top_left;
        let [x1, y1] = self.border.bottom_right;
        if x0 > x1 || y0 > y1 {
            return invalid("border.top_left must be above and left of border.bottom_right");
        }
        if x1 >= self.canvas.width || y1 >= self.canvas.height {
            return invalid("border.bottom_right must lie inside the canvas");
        }
        if self.border.width == 0 {
            return invalid("border.width must be at least 1");
        }
        let (w, h) = (x1 - x0 + 1, y1 - y0 + 1);
        if 2 * self.border.width > w.min(h) {
            return invalid("border.width does not fit inside the border rectangle");
        }

        if self.text.label.is_empty() {
            return invalid("text.label must not be empty");
        }
        if !self.font.size.is_finite() || self.font.size <= 0.0 {
            return invalid("font.size must be a positive number");
        }
        if self.font.size > self.max_font_size() {
            return invalid(&format!(
                "font.size must be at most {} for a {}px tall canvas",
                self.max_font_size(),
                self.canvas.height
            ));
        }
        if self.text.outline.radius > self.canvas.width.min(self.canvas.height) {
            return invalid("text.outline.radius must not exceed the canvas width or height");
        }
        Ok(())
    }

    /// Largest accepted font size: a few times the canvas height.
    fn max_font_size(&self) -> f32 {
        self.canvas.height as f32 * MAX_FONT_HEIGHT_RATIO
    }

    pub fn border_params(&self) -> BorderParams {
        let [x0, y0] = self.border.top_left;
        let [x1, y1] = self.border.bottom_right;
        BorderParams {
            top_left: (x0, y0),
            bottom_right: (x1, y1),
            stroke: self.border.width,
            color: self.border.color,
        }
    }
}

/// Canvas size and background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            background: Color::BLACK,
        }
    }
}

/// Border rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BorderConfig {
    pub color: Color,
    /// Stroke width in pixels, drawn inward from the corners.
    pub width: u32,
    /// Inclusive corners as `[x, y]`.
    pub top_left: [u32; 2],
    pub bottom_right: [u32; 2],
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            color: Color::CYAN,
            width: 3,
            top_left: [50, 50],
            bottom_right: [750, 350],
        }
    }
}

/// Label text and its colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextConfig {
    pub label: String,
    /// Color of the final, topmost pass.
    pub fill: Color,
    pub outline: OutlineConfig,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            label: "XiwA-OS".to_string(),
            fill: Color::WHITE,
            outline: OutlineConfig::default(),
        }
    }
}

/// Halo drawn under the label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutlineConfig {
    pub color: Color,
    /// Offsets `1..=radius` in each cardinal direction; 0 disables the halo.
    pub radius: u32,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            color: Color::CYAN,
            radius: 3,
        }
    }
}

/// Font selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    /// Font file name to search for, or a path to a font file.
    pub name: String,
    /// Pixel size (em height).
    pub size: f32,
    /// Directories searched (recursively) before the platform font directories.
    pub search_dirs: Vec<PathBuf>,
    /// Whether to search the platform font directories at all.
    pub system_fonts: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            name: "arial.ttf".to_string(),
            size: 72.0,
            search_dirs: Vec::new(),
            system_fonts: true,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(LogoConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(value)
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<LogoConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: LogoConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from an optional file, layered over stock defaults.
///
/// `None` yields the validated defaults. A path that does not exist is an
/// error: a config the user asked for must not be silently ignored.
pub fn load_config(path: Option<&Path>) -> Result<LogoConfig, ConfigError> {
    let overlay = path.map(load_raw_config).transpose()?;
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `logo.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Boot Logo Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Where the PNG is written. Missing parent directories are created.
output = "/boot/xiwa.png"

# ---------------------------------------------------------------------------
# Canvas
# ---------------------------------------------------------------------------
[canvas]
width = 800
height = 400
# Colors: "#rgb", "#rrggbb" or a name (black, white, cyan, red, ...)
background = "black"

# ---------------------------------------------------------------------------
# Border rectangle
# ---------------------------------------------------------------------------
[border]
color = "cyan"
# Stroke width in pixels; the stroke grows inward from the corners.
width = 3
# Inclusive corners as [x, y].
top_left = [50, 50]
bottom_right = [750, 350]

# ---------------------------------------------------------------------------
# Label
# ---------------------------------------------------------------------------
[text]
label = "XiwA-OS"
# Color of the topmost pass.
fill = "white"

# Halo drawn under the label: the label is drawn shifted left, right, up and
# down by 1, 2, ... radius pixels before the fill pass. 0 disables it;
# it may not exceed the smaller canvas side.
[text.outline]
color = "cyan"
radius = 3

# ---------------------------------------------------------------------------
# Font
# ---------------------------------------------------------------------------
[font]
# File name searched for in search_dirs and the system font directories,
# or a path to a .ttf/.otf file. When it cannot be loaded, a built-in
# bitmap font is used instead.
name = "arial.ttf"
# Pixel size, at most four times the canvas height.
size = 72.0
# Extra directories searched (recursively) before the system ones.
search_dirs = []
# Search the platform font directories (/usr/share/fonts, ~/.fonts, ...).
system_fonts = true
"##
}
