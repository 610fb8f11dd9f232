//! Internal module for line prefixes, size formatting, and final assembly.

use crate::options::TwigOptions;
use crate::types::LineMeta;

/// The four prefix fragments derived from the indent width.
///
/// Each fragment is exactly `indent` display columns wide, so descendant
/// lines align under an ongoing sibling list.
pub(crate) struct Glyphs {
    /// Blank continuation: indent spaces, used under a last sibling.
    pub gap: String,
    /// Carrying continuation: a vertical bar padded with spaces, used under
    /// a non-last sibling.
    pub bar: String,
    /// Branch connector for a non-last directory entry.
    pub tee: String,
    /// Corner connector for the last directory entry.
    pub elbow: String,
}

impl Glyphs {
    pub fn new(indent: usize) -> Self {
        Self {
            gap: " ".repeat(indent),
            bar: format!("│{}", " ".repeat(indent - 1)),
            tee: format!("├{}", "─".repeat(indent - 1)),
            elbow: format!("└{}", "─".repeat(indent - 1)),
        }
    }
}

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Formats a raw byte count using binary-prefix units.
///
/// The largest unit at which the value is non-zero is selected, capped at
/// GB. Byte-scale values are plain integers; scaled values are rounded to
/// two decimal places with trailing zeros trimmed, keeping at least one
/// decimal.
///
/// ```
/// use twig::human_size;
///
/// assert_eq!(human_size(0), "0B");
/// assert_eq!(human_size(1023), "1023B");
/// assert_eq!(human_size(1024), "1.0KB");
/// assert_eq!(human_size(1536), "1.5KB");
/// ```
pub fn human_size(bytes: u64) -> String {
    let mut shift = 0u32;
    while (shift / 10 + 1) < UNITS.len() as u32 && (bytes >> (shift + 10)) != 0 {
        shift += 10;
    }
    if shift == 0 {
        return format!("{bytes}{}", UNITS[0]);
    }
    let scaled = bytes as f64 / (1u64 << shift) as f64;
    let mut value = format!("{scaled:.2}");
    while value.ends_with('0') {
        value.pop();
    }
    if value.ends_with('.') {
        value.push('0');
    }
    format!("{value}{}", UNITS[(shift / 10) as usize])
}

/// Trims a trailing sparse separator and applies the size column, then joins
/// the lines into the final text.
///
/// Lines and metadata are popped in lockstep so the two sequences stay the
/// same length.
pub(crate) fn finalize(
    lines: &mut Vec<String>,
    metas: &mut Vec<Option<LineMeta>>,
    options: &TwigOptions,
    glyphs: &Glyphs,
) -> String {
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
        metas.pop();
    }

    if options.show_size {
        let width = metas
            .iter()
            .flatten()
            .map(|meta| meta.size.len())
            .max()
            .unwrap_or(1);
        for (line, meta) in lines.iter_mut().zip(metas.iter()) {
            if line.is_empty() {
                continue;
            }
            let size = meta.as_ref().map_or(" ", |m| m.size.as_str());
            *line = format!("{size:>width$}{}{line}", glyphs.gap);
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
