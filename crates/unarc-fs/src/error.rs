use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to remove file '{path}': {source}")]
    RemoveFile { path: PathBuf, source: io::Error },

    #[error("failed to remove directory '{path}': {source}")]
    RemoveDir { path: PathBuf, source: io::Error },

    #[error("failed to inspect '{path}': {source}")]
    Inspect { path: PathBuf, source: io::Error },

    #[error("failed to walk '{path}': {source}")]
    Walk {
        path:   PathBuf,
        source: walkdir::Error,
    },
}

impl Error {
    pub fn path(&self) -> &Path {
        match self {
            Self::RemoveFile { path, .. }
            | Self::RemoveDir { path, .. }
            | Self::Inspect { path, .. }
            | Self::Walk { path, .. } => path,
        }
    }

    /// Whether the failure means the path does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::RemoveFile { source, .. }
            | Self::RemoveDir { source, .. }
            | Self::Inspect { source, .. } => is_absent(source),
            Self::Walk { source, .. } => source.io_error().is_some_and(is_absent),
        }
    }
}

/// Nothing exists at the path itself.
pub(crate) fn is_missing(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound
}

/// `NotFound`, or a path component that is not a directory.
pub(crate) fn is_absent(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

pub type Result<T> = std::result::Result<T, Error>;
