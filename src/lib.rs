//! # Xiwa Logo
//!
//! Renders the XiwA-OS boot logo: a black canvas, a cyan rectangular border,
//! and the centered label "XiwA-OS" drawn in white over a cyan halo. The
//! result is written as a PNG to `/boot/xiwa.png`.
//!
//! # Architecture: Draw, Then Write
//!
//! ```text
//! 1. Config    logo.toml + CLI flags  →  LogoConfig      (validated)
//! 2. Compose   LogoConfig + face      →  Canvas          (pure, in memory)
//! 3. Write     Canvas                 →  /boot/xiwa.png  (mkdir, encode, write)
//! ```
//!
//! Composition never touches the filesystem, so unit tests exercise the whole
//! drawing pipeline against a recording [`imaging::TextFace`] and the `check`
//! command previews placement without writing anything.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`render`] | The pipeline: validate, compose, write, report |
//! | [`config`] | Layered `logo.toml` loading, validation, stock defaults |
//! | [`imaging`] | Canvas, border rings, text faces, font lookup, placement math |
//! | [`types`] | Shared value types (`TextBounds`, `TextPlacement`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## The Font Is the Only Soft Failure
//!
//! The configured TrueType font may be missing on a freshly installed system.
//! Rather than fail the boot setup, [`imaging::load_font`] falls back to a
//! built-in bitmap face and says so in the report. Every other problem
//! (directory creation, encoding, writing) is an error with its own
//! [`render::RenderError`] variant.
//!
//! ## Centering on Ink, Not on the Advance Box
//!
//! The label is centered on its measured ink bounding box. Glyph side
//! bearings and the ascent above capital letters would otherwise push the
//! text off-center by a few pixels.
//!
//! ## Deterministic Output
//!
//! Identical config and font give byte-identical PNGs. The render report
//! carries a SHA-256 of the written bytes so that is easy to check.

pub mod config;
pub mod imaging;
pub mod output;
pub mod render;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
