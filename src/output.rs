//! Output formatting for twig results.
//!
//! Provides functions to format a [`TwigResult`] as the bare tree text, the
//! headed text layout used for files, or JSON.

use crate::{TwigError, TwigResult};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The bare tree text.
    Tree,
    /// The tree text preceded by a `mode: <name>` header and a blank line.
    Text,
    /// The whole [`TwigResult`] serialized as JSON.
    Json,
}

/// Formats the twig result into a string.
pub fn format_result(result: &TwigResult, format: OutputFormat, pretty: bool) -> String {
    match format {
        OutputFormat::Tree => result.text.clone(),
        OutputFormat::Text => format_text(result),
        OutputFormat::Json => format_json(result, pretty),
    }
}

/// Writes the formatted result to a file.
///
/// With [`OutputFormat::Text`] the file contains exactly
/// `mode: <name>\n\n<tree text>`.
pub fn write_result_to_file(
    result: &TwigResult,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), TwigError> {
    let content = format_result(result, format, pretty);
    fs::write(&path, content).map_err(|e| TwigError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_text(result: &TwigResult) -> String {
    let mut out = String::with_capacity(result.text.len() + 32);
    out.push_str("mode: ");
    out.push_str(result.mode.description());
    out.push_str("\n\n");
    out.push_str(&result.text);
    out
}

fn format_json(result: &TwigResult, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(result).expect("JSON serialization failed")
    } else {
        serde_json::to_string(result).expect("JSON serialization failed")
    }
}
