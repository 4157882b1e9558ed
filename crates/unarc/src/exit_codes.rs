//! Process exit codes.

/// A fatal error surfaced during the run.
pub const FATAL_ERROR: u8 = 1;
/// No `--type` was given and the archive file name has no known suffix.
pub const TYPE_UNDETERMINED: u8 = 10;
/// The `--type` token is not a known archive type.
pub const TYPE_UNRECOGNIZED: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    FatalError,
    TypeUndetermined,
    TypeUnrecognized,
}

impl Exit {
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::FatalError => FATAL_ERROR,
            Self::TypeUndetermined => TYPE_UNDETERMINED,
            Self::TypeUnrecognized => TYPE_UNRECOGNIZED,
        }
    }
}

impl From<Exit> for std::process::ExitCode {
    fn from(exit: Exit) -> Self {
        Self::from(exit.code())
    }
}
