use crate::options::Mode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Metadata attached to a single output line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineMeta {
    /// The full path of the entry this line describes.
    pub path: PathBuf,
    /// Whether the entry is a file.
    pub is_file: bool,
    /// Formatted byte size for a file, or the immediate child count for a
    /// directory, as a string.
    pub size: String,
}

/// One emitted output line paired with its metadata.
///
/// Blank separator lines carry no metadata and never receive a size
/// annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRecord {
    /// The rendered line, including its box-drawing prefix and, when the
    /// size column is enabled, the aligned size field.
    pub line: String,
    /// Metadata for the entry, or `None` for a separator line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<LineMeta>,
}

/// The complete result of a twig build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwigResult {
    /// The traversal mode the tree was built with.
    pub mode: Mode,
    /// Every output line in emission order, each paired with its metadata.
    pub records: Vec<LineRecord>,
    /// The fully assembled text: lines joined by newlines, terminated by a
    /// trailing newline.
    pub text: String,
}
