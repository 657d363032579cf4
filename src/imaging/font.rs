//! Font resolution with a built-in fallback.
//!
//! [`load_font`] never fails. It tries the configured font file and, when
//! that cannot be found, read or parsed, falls back to the built-in
//! [`BitmapFace`]. The outcome is tagged so callers can report which branch
//! was taken:
//!
//! ```text
//! FontLoad::Loaded   { face: Scalable(..), path }   named font found and parsed
//! FontLoad::Fallback { face: Bitmap(..),  reason }  anything went wrong
//! ```
//!
//! Only the font step degrades gracefully. Everything else in the render
//! pipeline is fail-fast.
//!
//! ## Search order
//!
//! 1. `name` itself, if it is an existing file path
//! 2. each configured `search_dirs` entry, recursively
//! 3. platform font directories (when `system_fonts` is on)
//!
//! File names are compared case-insensitively, so `arial.ttf` finds
//! `Arial.TTF`.

use super::bitmap_font::BitmapFace;
use super::text::{ScalableFace, Typeface};
use crate::config::FontConfig;
use ab_glyph::FontVec;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum FontLoadError {
    #[error("font '{0}' not found")]
    NotFound(String),
    #[error("failed to read font {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} is not a valid TrueType/OpenType font")]
    Invalid(PathBuf),
}

/// Outcome of [`load_font`].
#[derive(Debug)]
pub enum FontLoad {
    Loaded { face: Typeface, path: PathBuf },
    Fallback { face: Typeface, reason: FontLoadError },
}

impl FontLoad {
    pub fn face(&self) -> &Typeface {
        match self {
            FontLoad::Loaded { face, .. } | FontLoad::Fallback { face, .. } => face,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FontLoad::Fallback { .. })
    }
}

/// Load the configured font, or the built-in face if that fails.
pub fn load_font(config: &FontConfig) -> FontLoad {
    match load_scalable(config) {
        Ok((face, path)) => {
            tracing::info!(path = %path.display(), size = config.size, "loaded font");
            FontLoad::Loaded {
                face: Typeface::Scalable(face),
                path,
            }
        }
        Err(reason) => {
            let face = BitmapFace::for_size(config.size);
            tracing::warn!(%reason, pixel = face.pixel, "falling back to built-in font");
            FontLoad::Fallback {
                face: Typeface::Bitmap(face),
                reason,
            }
        }
    }
}

fn load_scalable(config: &FontConfig) -> Result<(ScalableFace, PathBuf), FontLoadError> {
    let path = find_font(config).ok_or_else(|| FontLoadError::NotFound(config.name.clone()))?;
    let bytes = std::fs::read(&path).map_err(|source| FontLoadError::Read {
        path: path.clone(),
        source,
    })?;
    let font = FontVec::try_from_vec(bytes).map_err(|_| FontLoadError::Invalid(path.clone()))?;
    Ok((ScalableFace::new(font, config.size), path))
}

/// Resolve the configured font name to a file on disk.
pub fn find_font(config: &FontConfig) -> Option<PathBuf> {
    let direct = Path::new(&config.name);
    if direct.is_file() {
        return Some(direct.to_path_buf());
    }
    // A name with directory components is a path, not something to search for
    let file_name = direct.file_name()?.to_str()?;
    if direct.components().count() > 1 {
        return None;
    }

    let system = if config.system_fonts {
        system_font_dirs()
    } else {
        Vec::new()
    };

    config
        .search_dirs
        .iter()
        .chain(system.iter())
        .find_map(|dir| find_in_dir(dir, file_name))
}

/// Recursively search `dir` for a file named `file_name`, ignoring case.
///
/// Entries are visited in sorted order so the result is stable when the
/// same name appears twice.
pub fn find_in_dir(dir: &Path, file_name: &str) -> Option<PathBuf> {
    if !dir.is_dir() {
        return None;
    }
    tracing::debug!(dir = %dir.display(), file_name, "searching for font");

    WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .find(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.eq_ignore_ascii_case(file_name))
        })
        .map(|entry| entry.into_path())
}

/// Platform font directories, most user-specific first.
pub fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    let home = env::var_os("HOME").map(PathBuf::from);

    match env::var_os("XDG_DATA_HOME") {
        Some(data_home) => dirs.push(PathBuf::from(data_home).join("fonts")),
        None => {
            if let Some(home) = &home {
                dirs.push(home.join(".local/share/fonts"));
            }
        }
    }
    if let Some(home) = &home {
        dirs.push(home.join(".fonts"));
        dirs.push(home.join("Library/Fonts"));
    }

    let data_dirs = env::var("XDG_DATA_DIRS")
        .unwrap_or_else(|_| "/usr/local/share:/usr/share".to_string());
    dirs.extend(
        data_dirs
            .split(':')
            .filter(|d| !d.is_empty())
            .map(|d| Path::new(d).join("fonts")),
    );

    dirs.push(PathBuf::from("/Library/Fonts"));
    dirs.push(PathBuf::from("/System/Library/Fonts"));
    if let Some(windir) = env::var_os("WINDIR") {
        dirs.push(PathBuf::from(windir).join("Fonts"));
    }

    dedup_preserving_order(dirs)
}

fn dedup_preserving_order(dirs: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = std::collections::HashSet::new();
    dirs.into_iter().filter(|d| seen.insert(d.clone())).collect()
}
