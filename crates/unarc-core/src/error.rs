#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Archive(#[from] unarc_archive::Error),

    #[error("failed to verify '{path}': {source}")]
    Verify {
        path:   String,
        source: unarc_verify::VerificationError,
    },

    #[error(transparent)]
    Fs(#[from] unarc_fs::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
