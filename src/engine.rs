use crate::error::TwigError;
use crate::options::{Mode, TwigOptions};
use crate::tree::{self, Glyphs, human_size};
use crate::types::{LineMeta, LineRecord, TwigResult};
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// A directory entry as produced by one listing pass. Consumed immediately
/// during traversal.
struct Entry {
    name: String,
    path: PathBuf,
    is_file: bool,
    size: u64,
}

struct Builder<'a> {
    options: &'a TwigOptions,
    glyphs: Glyphs,
    max_layer: usize,
    lines: Vec<String>,
    metas: Vec<Option<LineMeta>>,
}

impl<'a> Builder<'a> {
    fn new(options: &'a TwigOptions) -> Self {
        Self {
            options,
            glyphs: Glyphs::new(options.indent),
            max_layer: options.max_depth.unwrap_or(usize::MAX),
            lines: Vec::new(),
            metas: Vec::new(),
        }
    }

    /// Lists a directory's entries, skipping hidden names unless configured
    /// otherwise. Any listing or stat failure aborts the whole build.
    fn list_entries(&self, dir: &Path) -> Result<Vec<Entry>, TwigError> {
        let mut entries = Vec::new();
        for item in fs::read_dir(dir).map_err(|e| TwigError::io(dir, e))? {
            let item = item.map_err(|e| TwigError::io(dir, e))?;
            let name = item.file_name().to_string_lossy().into_owned();
            if !self.options.show_hidden && name.starts_with('.') {
                continue;
            }
            let path = item.path();
            let metadata = fs::metadata(&path).map_err(|e| TwigError::io(&path, e))?;
            entries.push(Entry {
                name,
                path,
                is_file: metadata.is_file(),
                size: metadata.len(),
            });
        }
        Ok(entries)
    }

    /// Lists a directory split into (dirs, files) and records the directory's
    /// own metadata entry: its immediate child count.
    fn split_entries(&mut self, dir: &Path) -> Result<(Vec<Entry>, Vec<Entry>), TwigError> {
        let entries = self.list_entries(dir)?;
        let (files, dirs): (Vec<_>, Vec<_>) = entries.into_iter().partition(|e| e.is_file);
        self.metas.push(Some(LineMeta {
            path: dir.to_path_buf(),
            is_file: false,
            size: (dirs.len() + files.len()).to_string(),
        }));
        Ok((dirs, files))
    }

    fn walk(&mut self, dir: &Path, prefix: &str, layer: usize) -> Result<(), TwigError> {
        match self.options.mode {
            Mode::DirFirst => self.dir_first(dir, prefix, layer),
            Mode::DirOnly => self.dir_only(dir, prefix, layer),
            Mode::FileFirst => self.file_first(dir, prefix, layer),
            Mode::Ordered => self.ordered(dir, prefix, layer),
        }
    }

    /// Emits all directory entries: every one but the last gets a branch
    /// connector and a carrying continuation for its subtree, the last gets
    /// the corner connector and a blank continuation.
    fn add_dirs(&mut self, dirs: &[Entry], prefix: &str, layer: usize) -> Result<(), TwigError> {
        let Some((last, rest)) = dirs.split_last() else {
            return Ok(());
        };
        let carry = format!("{prefix}{}", self.glyphs.bar);
        let branch = format!("{prefix}{}", self.glyphs.tee);
        for entry in rest {
            self.lines
                .push(format!("{branch}{}{}", entry.name, self.options.dtail));
            self.walk(&entry.path, &carry, layer + 1)?;
        }
        let blank = format!("{prefix}{}", self.glyphs.gap);
        let corner = format!("{prefix}{}", self.glyphs.elbow);
        self.lines
            .push(format!("{corner}{}{}", last.name, self.options.dtail));
        self.walk(&last.path, &blank, layer + 1)
    }

    /// Emits the files of one directory in listing order, then a blank
    /// separator line (no metadata) when sparse output is on.
    fn add_files(&mut self, files: &[Entry], file_prefix: &str) {
        for entry in files {
            self.lines.push(format!("{file_prefix}{}", entry.name));
            self.metas.push(Some(LineMeta {
                path: entry.path.clone(),
                is_file: true,
                size: human_size(entry.size),
            }));
        }
        if self.options.sparse && !files.is_empty() {
            self.lines.push(file_prefix.trim_end().to_string());
            self.metas.push(None);
        }
    }

    fn dir_first(&mut self, dir: &Path, prefix: &str, layer: usize) -> Result<(), TwigError> {
        let (dirs, files) = self.split_entries(dir)?;
        if layer < self.max_layer {
            if !dirs.is_empty() {
                self.add_dirs(&dirs, prefix, layer)?;
            }
            let file_prefix = format!("{prefix}{}", self.glyphs.gap);
            self.add_files(&files, &file_prefix);
        }
        Ok(())
    }

    fn dir_only(&mut self, dir: &Path, prefix: &str, layer: usize) -> Result<(), TwigError> {
        let (dirs, _files) = self.split_entries(dir)?;
        if layer < self.max_layer && !dirs.is_empty() {
            self.add_dirs(&dirs, prefix, layer)?;
        }
        Ok(())
    }

    fn file_first(&mut self, dir: &Path, prefix: &str, layer: usize) -> Result<(), TwigError> {
        let (dirs, files) = self.split_entries(dir)?;
        if layer < self.max_layer {
            if !dirs.is_empty() {
                // Files continue the sibling chain, so they carry the bar.
                let file_prefix = format!("{prefix}{}", self.glyphs.bar);
                self.add_files(&files, &file_prefix);
                self.add_dirs(&dirs, prefix, layer)?;
            } else {
                let file_prefix = format!("{prefix}{}", self.glyphs.gap);
                self.add_files(&files, &file_prefix);
            }
        }
        Ok(())
    }

    /// The only mode where files and directories interleave: one global
    /// name-sorted pass, recursing into each directory right after its line.
    fn ordered(&mut self, dir: &Path, prefix: &str, layer: usize) -> Result<(), TwigError> {
        let mut leaves = self.list_entries(dir)?;
        self.metas.push(Some(LineMeta {
            path: dir.to_path_buf(),
            is_file: false,
            size: leaves.len().to_string(),
        }));
        if layer < self.max_layer && !leaves.is_empty() {
            leaves.sort_by(|a, b| a.name.cmp(&b.name));
            let Some((last, rest)) = leaves.split_last() else {
                return Ok(());
            };
            let carry = format!("{prefix}{}", self.glyphs.bar);
            let branch = format!("{prefix}{}", self.glyphs.tee);
            for entry in rest {
                self.add_leaf(entry, &branch, &carry, layer)?;
            }
            let blank = format!("{prefix}{}", self.glyphs.gap);
            let corner = format!("{prefix}{}", self.glyphs.elbow);
            self.add_leaf(last, &corner, &blank, layer)?;
        }
        Ok(())
    }

    fn add_leaf(
        &mut self,
        entry: &Entry,
        connector: &str,
        child_prefix: &str,
        layer: usize,
    ) -> Result<(), TwigError> {
        if entry.is_file {
            self.lines.push(format!("{connector}{}", entry.name));
            self.metas.push(Some(LineMeta {
                path: entry.path.clone(),
                is_file: true,
                size: human_size(entry.size),
            }));
        } else {
            self.lines
                .push(format!("{connector}{}{}", entry.name, self.options.dtail));
            self.ordered(&entry.path, child_prefix, layer + 1)?;
        }
        Ok(())
    }
}

/// Builds the tree representation of `options.root`.
///
/// The first line is always the root's display name (absolute path or base
/// name per `absolute_root`); every following line is produced by the
/// configured traversal [`Mode`].
///
/// # Errors
///
/// Returns [`TwigError::InvalidConfig`] for an indent outside `[1, 8]`,
/// [`TwigError::NotADirectory`] if the root does not resolve to an existing
/// directory, and [`TwigError::Io`] if any listing or stat call fails during
/// traversal. All errors abort the whole build; there is no partial result.
pub fn twig(options: TwigOptions) -> Result<TwigResult, TwigError> {
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Starting twig with root: {}, mode: {}",
        options.root.display(),
        options.mode.code()
    );
    options.validate()?;
    if !options.root.is_dir() {
        return Err(TwigError::NotADirectory(options.root.clone()));
    }
    let root = std::path::absolute(&options.root).map_err(|e| TwigError::io(&options.root, e))?;

    let mut builder = Builder::new(&options);
    let display = if options.absolute_root {
        root.display().to_string()
    } else {
        root.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string())
    };
    builder.lines.push(display);
    builder.walk(&root, "", 0)?;

    let text = tree::finalize(
        &mut builder.lines,
        &mut builder.metas,
        &options,
        &builder.glyphs,
    );
    #[cfg(feature = "logging")]
    tracing::debug!("Built {} lines", builder.lines.len());

    let records = builder
        .lines
        .into_iter()
        .zip(builder.metas)
        .map(|(line, meta)| LineRecord { line, meta })
        .collect();
    Ok(TwigResult {
        mode: options.mode,
        records,
        text,
    })
}
