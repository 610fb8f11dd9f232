use crate::error::TwigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Traversal strategy selecting how directory and file entries are sequenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Subdirectories first, then this directory's own files, flat.
    DirFirst,
    /// Like [`Mode::DirFirst`] but files are never emitted.
    DirOnly,
    /// A directory's own files before its subdirectories.
    FileFirst,
    /// Files and directories interleaved in one lexicographic order.
    Ordered,
}
impl Mode {
    /// The short code used on the command line (`df`, `do`, `ff`, `od`).
    pub fn code(&self) -> &'static str {
        match self {
            Mode::DirFirst => "df",
            Mode::DirOnly => "do",
            Mode::FileFirst => "ff",
            Mode::Ordered => "od",
        }
    }
    /// Human-readable name, used in the `mode:` header of written output.
    pub fn description(&self) -> &'static str {
        match self {
            Mode::DirFirst => "Directory First",
            Mode::DirOnly => "Directory Only",
            Mode::FileFirst => "File First",
            Mode::Ordered => "Ordered",
        }
    }
}
impl FromStr for Mode {
    type Err = TwigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "df" => Ok(Mode::DirFirst),
            "do" => Ok(Mode::DirOnly),
            "ff" => Ok(Mode::FileFirst),
            "od" => Ok(Mode::Ordered),
            other => Err(TwigError::InvalidConfig(format!(
                "unknown mode '{other}', expected one of df, do, ff, od"
            ))),
        }
    }
}

/// Valid indent range; the builder clamps into it, validation rejects outside it.
pub(crate) const INDENT_RANGE: std::ops::RangeInclusive<usize> = 1..=8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwigOptions {
    pub root: PathBuf,
    pub mode: Mode,
    pub indent: usize,
    pub max_depth: Option<usize>,
    pub sparse: bool,
    pub dtail: String,
    pub show_hidden: bool,
    pub show_size: bool,
    pub absolute_root: bool,
}
impl Default for TwigOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            mode: Mode::FileFirst,
            indent: 4,
            max_depth: None,
            sparse: true,
            dtail: String::from("/"),
            show_hidden: false,
            show_size: false,
            absolute_root: false,
        }
    }
}
impl TwigOptions {
    pub(crate) fn validate(&self) -> Result<(), TwigError> {
        if !INDENT_RANGE.contains(&self.indent) {
            return Err(TwigError::InvalidConfig(format!(
                "indent must be between {} and {}, got {}",
                INDENT_RANGE.start(),
                INDENT_RANGE.end(),
                self.indent
            )));
        }
        Ok(())
    }
}
#[derive(Debug, Default)]
pub struct TwigBuilder {
    options: TwigOptions,
}
impl TwigBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: TwigOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn mode(mut self, mode: Mode) -> Self {
        self.options.mode = mode;
        self
    }
    /// Sets the indent width, clamped into `[1, 8]`.
    pub fn indent(mut self, width: usize) -> Self {
        self.options.indent = width.clamp(*INDENT_RANGE.start(), *INDENT_RANGE.end());
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn sparse(mut self, yes: bool) -> Self {
        self.options.sparse = yes;
        self
    }
    pub fn dtail(mut self, tail: impl Into<String>) -> Self {
        self.options.dtail = tail.into();
        self
    }
    pub fn show_hidden(mut self, yes: bool) -> Self {
        self.options.show_hidden = yes;
        self
    }
    pub fn show_size(mut self, yes: bool) -> Self {
        self.options.show_size = yes;
        self
    }
    pub fn absolute_root(mut self, yes: bool) -> Self {
        self.options.absolute_root = yes;
        self
    }
    pub fn build(self) -> TwigOptions {
        self.options
    }
}
