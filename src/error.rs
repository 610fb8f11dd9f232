use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TwigError {
    #[error("I/O error on {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
impl TwigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TwigError::Io {
            path: path.into(),
            source,
        }
    }
}
