use std::fmt;

/// Why a file entry was left in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    VerificationFailed,
    NotFound,
}

/// The decision taken for one file entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovalOutcome {
    pub path:    String,
    pub existed: bool,
    /// Digest matched, or verification was disabled.
    pub verified: bool,
    pub removed: bool,
    pub skip:    Option<SkipReason>,
}

impl RemovalOutcome {
    pub(crate) fn not_found(path: String) -> Self {
        Self {
            path,
            existed: false,
            verified: false,
            removed: false,
            skip: Some(SkipReason::NotFound),
        }
    }

    pub(crate) fn mismatch(path: String) -> Self {
        Self {
            path,
            existed: true,
            verified: false,
            removed: false,
            skip: Some(SkipReason::VerificationFailed),
        }
    }

    /// Existing and verified; `removed` is false only in dry-run mode.
    pub(crate) fn accepted(path: String, removed: bool) -> Self {
        Self {
            path,
            existed: true,
            verified: true,
            removed,
            skip: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirSkipReason {
    NotEmpty,
    NotFound,
}

/// The sweep decision for one recorded directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryOutcome {
    pub path:    String,
    pub exists:  bool,
    pub empty:   bool,
    pub removed: bool,
    pub skip:    Option<DirSkipReason>,
}

/// Aggregate counts over a whole run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub files:               usize,
    pub removed:             usize,
    pub not_found:           usize,
    pub verification_failed: usize,
    pub directories:         usize,
    pub dirs_removed:        usize,
    pub dirs_not_empty:      usize,
    pub dirs_not_found:      usize,
}

impl Summary {
    pub fn record_file(&mut self, outcome: &RemovalOutcome) {
        self.files += 1;
        if outcome.removed {
            self.removed += 1;
        }
        match outcome.skip {
            Some(SkipReason::NotFound) => self.not_found += 1,
            Some(SkipReason::VerificationFailed) => self.verification_failed += 1,
            None => {}
        }
    }

    pub fn record_directory(&mut self, outcome: &DirectoryOutcome) {
        self.directories += 1;
        if outcome.removed {
            self.dirs_removed += 1;
        }
        match outcome.skip {
            Some(DirSkipReason::NotEmpty) => self.dirs_not_empty += 1,
            Some(DirSkipReason::NotFound) => self.dirs_not_found += 1,
            None => {}
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files: {} removed, {} not found, {} failed verification",
            self.files, self.removed, self.not_found, self.verification_failed
        )?;
        if self.directories > 0 {
            write!(
                f,
                "; {} directories: {} removed, {} not empty, {} not found",
                self.directories, self.dirs_removed, self.dirs_not_empty, self.dirs_not_found
            )?;
        }
        Ok(())
    }
}
