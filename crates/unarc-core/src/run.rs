use std::path::Path;

use unarc_archive::{Archive, ArchiveType, EntrySource};

use crate::context::RunContext;
use crate::error::Result;
use crate::outcome::Summary;
use crate::removal::remove_entry;
use crate::report::Reporter;
use crate::tracker::DirectoryTracker;

/// Drive `source` to completion, then sweep recorded directories.
///
/// Files are decided strictly in archive order. The directory sweep starts
/// only after the last entry has been handled, and only when the context
/// asks for it. Any error aborts the run; work already done is not undone.
pub fn run<S: EntrySource + ?Sized>(
    source: &mut S,
    ctx: &RunContext,
    reporter: &mut dyn Reporter,
) -> Result<Summary> {
    tracing::info!(
        target_dir = %ctx.target().display(),
        archive_type = %source.archive_type(),
        dry_run = ctx.is_dry_run(),
        verify = ctx.is_verifying(),
        remove_dirs = ctx.removes_dirs(),
        "starting run"
    );

    let mut summary = Summary::default();
    let mut tracker = DirectoryTracker::new();

    while let Some(entry) = source.next_entry() {
        let mut entry = entry?;
        let path = entry.path().to_string();
        match entry.content() {
            None => tracker.record(path),
            Some(content) => {
                let outcome = remove_entry(ctx, &path, content)?;
                reporter.file(&outcome);
                summary.record_file(&outcome);
            }
        }
    }

    if ctx.removes_dirs() {
        for outcome in tracker.sweep(ctx, reporter)? {
            summary.record_directory(&outcome);
        }
    } else if !tracker.is_empty() {
        tracing::debug!(directories = tracker.len(), "directory sweep disabled");
    }

    tracing::info!(%summary, "run complete");
    Ok(summary)
}

/// Open the archive at `path` and [`run`] over its entries.
pub fn run_archive(
    path: impl AsRef<Path>,
    kind: ArchiveType,
    ctx: &RunContext,
    reporter: &mut dyn Reporter,
) -> Result<Summary> {
    let mut archive = Archive::open(path, kind)?;
    let mut entries = archive.entries()?;
    run(&mut entries, ctx, reporter)
}
