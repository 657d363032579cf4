//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Render
//!
//! ```text
//! Canvas: 800x400
//! Font: /usr/share/fonts/truetype/msttcorefonts/Arial.ttf (72px)
//! Label: "XiwA-OS" 371x52 at (214, 174)
//! Output: /boot/xiwa.png (9213 bytes, sha256 3f0a9c1b7d2e)
//! Logo generated successfully at /boot/xiwa.png
//! ```
//!
//! When the named font cannot be loaded the font line says so:
//!
//! ```text
//! Font: built-in fallback (font 'arial.ttf' not found)
//! ```
//!
//! ## Check
//!
//! Same lines, but nothing is written and the last line is
//! `Would write /boot/xiwa.png`.
//!
//! # Architecture
//!
//! `format_*` functions return `Vec<String>` for testability; `print_*`
//! wrappers write to stdout. Format functions do no I/O.

use crate::render::{FontUsed, RenderReport};

/// Digest prefix length shown in the output line.
const DIGEST_PREFIX: usize = 12;

fn font_line(font: &FontUsed) -> String {
    match font {
        FontUsed::Named { path, size } => format!("Font: {} ({}px)", path.display(), size),
        FontUsed::Fallback { reason, .. } => format!("Font: built-in fallback ({})", reason),
    }
}

/// Format a render or check report.
pub fn format_render_report(report: &RenderReport) -> Vec<String> {
    let placement = &report.placement;
    let mut lines = vec![
        format!("Canvas: {}x{}", report.width, report.height),
        font_line(&report.font),
        format!(
            "Label: {:?} {}x{} at ({}, {})",
            report.label,
            placement.bounds.width,
            placement.bounds.height,
            placement.ink.0,
            placement.ink.1
        ),
    ];

    match &report.file {
        Some(file) => {
            let digest = &file.sha256[..DIGEST_PREFIX.min(file.sha256.len())];
            lines.push(format!(
                "Output: {} ({} bytes, sha256 {})",
                report.output.display(),
                file.bytes,
                digest
            ));
            lines.push(format!(
                "Logo generated successfully at {}",
                report.output.display()
            ));
        }
        None => lines.push(format!("Would write {}", report.output.display())),
    }

    lines
}

pub fn print_render_report(report: &RenderReport) {
    for line in format_render_report(report) {
        println!("{}", line);
    }
}
