use std::{fmt, io};

/// Which side of a comparison could not be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Target,
    Archive,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Target => "target file",
            Self::Archive => "archive entry",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("failed to read {side} for verification: {source}")]
    Read {
        side:   Side,
        source: io::Error,
    },
}

impl VerificationError {
    pub fn side(&self) -> Side {
        match self {
            Self::Read { side, .. } => *side,
        }
    }
}

pub type Result<T> = std::result::Result<T, VerificationError>;
