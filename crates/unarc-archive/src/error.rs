use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unrecognized archive type '{0}'")]
    UnrecognizedType(String),

    #[error("failed to open archive '{path}': {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("zip archive is corrupted: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("entry content was already consumed")]
    ContentConsumed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
