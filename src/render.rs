//! The logo render pipeline.
//!
//! ```text
//! validate → canvas → border → font → measure/center → halo → fill → mkdir → PNG
//! ```
//!
//! The drawing half ([`compose`]) is pure: it takes any [`TextFace`] and
//! returns the canvas, so tests can run it with a recording face and `check`
//! can run [`plan`] without touching the disk. [`render`] adds font loading
//! and the filesystem side.
//!
//! Font loading is the only step that degrades instead of failing (see
//! [`load_font`]). Directory creation, encoding and writing each surface
//! their own [`RenderError`] variant so the CLI can say which step broke.

use crate::config::{ConfigError, LogoConfig};
use crate::imaging::{Canvas, FontLoad, TextFace, center_text, load_font, outline_offsets};
use crate::types::TextPlacement;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Which font a render used.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FontUsed {
    Named { path: PathBuf, size: f32 },
    Fallback { requested: String, reason: String },
}

impl FontUsed {
    fn from_load(load: &FontLoad, requested: &str, size: f32) -> Self {
        match load {
            FontLoad::Loaded { path, .. } => FontUsed::Named {
                path: path.clone(),
                size,
            },
            FontLoad::Fallback { reason, .. } => FontUsed::Fallback {
                requested: requested.to_string(),
                reason: reason.to_string(),
            },
        }
    }
}

/// The encoded file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub bytes: u64,
    /// SHA-256 of the PNG bytes; equal configs give equal digests.
    pub sha256: String,
}

/// Summary of a render (or of a dry run, when `file` is `None`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderReport {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub label: String,
    pub font: FontUsed,
    pub placement: TextPlacement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<WrittenFile>,
}

/// A finished canvas and where the label went.
pub struct Composition {
    pub canvas: Canvas,
    pub placement: TextPlacement,
}

/// Measure the label under `face` and center it on the canvas.
pub fn plan(config: &LogoConfig, face: &impl TextFace) -> TextPlacement {
    let bounds = face.measure(&config.text.label);
    let placement = center_text((config.canvas.width, config.canvas.height), bounds);
    tracing::debug!(?bounds, ink = ?placement.ink, origin = ?placement.origin, "placed label");
    placement
}

/// Draw the whole logo in memory.
///
/// Order is fixed: border, then every halo pass, then the fill, so the fill
/// always ends up on top.
pub fn compose(config: &LogoConfig, face: &impl TextFace) -> Composition {
    let label = &config.text.label;
    let mut canvas = Canvas::new(
        config.canvas.width,
        config.canvas.height,
        config.canvas.background,
    );
    tracing::debug!(width = canvas.width(), height = canvas.height(), "allocated canvas");

    canvas.draw_border(&config.border_params());

    let placement = plan(config, face);
    let outline = &config.text.outline;
    for origin in outline_offsets(placement.origin, outline.radius) {
        canvas.draw_text(face, label, origin, outline.color);
    }
    canvas.draw_text(face, label, placement.origin, config.text.fill);

    Composition { canvas, placement }
}

/// Create the parent directory of `path`, then encode and write the canvas.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<WrittenFile, RenderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| RenderError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let bytes = canvas.encode_png()?;
    fs::write(path, &bytes).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let sha256 = format!("{:x}", Sha256::digest(&bytes));
    tracing::info!(path = %path.display(), bytes = bytes.len(), %sha256, "wrote logo");
    Ok(WrittenFile {
        bytes: bytes.len() as u64,
        sha256,
    })
}

/// Render the logo described by `config` and write it to `config.output`.
#[tracing::instrument(skip_all, fields(output = %config.output.display()))]
pub fn render(config: &LogoConfig) -> Result<RenderReport, RenderError> {
    config.validate()?;
    let font = load_font(&config.font);
    let composition = compose(config, font.face());
    let file = write_png(&composition.canvas, &config.output)?;
    Ok(report(config, &font, composition.placement, Some(file)))
}

/// Resolve the font and placement without drawing or writing anything.
pub fn check(config: &LogoConfig) -> Result<RenderReport, RenderError> {
    config.validate()?;
    let font = load_font(&config.font);
    let placement = plan(config, font.face());
    Ok(report(config, &font, placement, None))
}

fn report(
    config: &LogoConfig,
    font: &FontLoad,
    placement: TextPlacement,
    file: Option<WrittenFile>,
) -> RenderReport {
    RenderReport {
        output: config.output.clone(),
        width: config.canvas.width,
        height: config.canvas.height,
        label: config.text.label.clone(),
        font: FontUsed::from_load(font, &config.font.name, config.font.size),
        placement,
        file,
    }
}
