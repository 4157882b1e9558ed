use unarc_fs::DirRemoval;

use crate::context::RunContext;
use crate::error::Result;
use crate::outcome::{DirSkipReason, DirectoryOutcome};
use crate::report::Reporter;

/// Directory entries seen during the file pass, in encounter order.
#[derive(Clone, Debug, Default)]
pub struct DirectoryTracker {
    records: Vec<String>,
}

impl DirectoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a directory entry for the sweep.
    ///
    /// Entries naming the archive root itself (`./`) are not recorded; the
    /// target directory is never a sweep candidate.
    pub fn record(&mut self, path: impl Into<String>) {
        let path = path.into();
        if unarc_fs::is_root(&path) {
            tracing::warn!(path, "archive root entry is never removed");
            return;
        }
        self.records.push(path);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Reverse lexicographic order of the recorded paths.
    ///
    /// This puts `a/b/` before `a/` but is not a true depth ordering: when an
    /// archive spells the same directory two ways (`p/` and `./p/q/`) the
    /// parent can come first and is then found non-empty.
    pub fn sweep_order(&self) -> Vec<&str> {
        let mut order: Vec<&str> = self.records.iter().map(String::as_str).collect();
        order.sort_unstable_by(|a, b| b.cmp(a));
        order
    }

    /// Remove every recorded directory that is empty at this point.
    ///
    /// Must only run after every file entry has been handled. Stops at the
    /// first failure other than the directory already being gone.
    pub fn sweep(
        &self,
        ctx: &RunContext,
        reporter: &mut dyn Reporter,
    ) -> Result<Vec<DirectoryOutcome>> {
        let mut outcomes = Vec::with_capacity(self.records.len());
        for path in self.sweep_order() {
            let outcome = sweep_one(ctx, path)?;
            reporter.directory(&outcome);
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }
}

fn sweep_one(ctx: &RunContext, path: &str) -> Result<DirectoryOutcome> {
    let resolved = unarc_fs::resolve(ctx.target(), path);
    let mut outcome = DirectoryOutcome {
        path:    path.to_string(),
        exists:  false,
        empty:   false,
        removed: false,
        skip:    None,
    };

    let Some(count) = unarc_fs::subtree_len(&resolved)? else {
        tracing::debug!(path, "directory not found in target directory");
        outcome.skip = Some(DirSkipReason::NotFound);
        return Ok(outcome);
    };
    outcome.exists = true;

    if count > 1 {
        tracing::debug!(path, entries = count, "directory not empty");
        outcome.skip = Some(DirSkipReason::NotEmpty);
        return Ok(outcome);
    }
    outcome.empty = true;

    if ctx.is_dry_run() {
        tracing::debug!(path, "would remove empty directory (dry run)");
        return Ok(outcome);
    }

    match unarc_fs::remove_dir(&resolved)? {
        DirRemoval::Removed => {
            tracing::debug!(path, "removed empty directory");
            outcome.removed = true;
        }
        DirRemoval::AlreadyGone => {
            tracing::debug!(path, "directory vanished before removal");
            outcome.skip = Some(DirSkipReason::NotFound);
        }
    }
    Ok(outcome)
}
