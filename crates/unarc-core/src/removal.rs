use unarc_archive::Content;

use crate::context::RunContext;
use crate::error::{Error, Result};
use crate::outcome::RemovalOutcome;

/// Decide and carry out the removal of one file entry.
///
/// Absence of the target is a skip. A read failure during verification and
/// any failure to delete are fatal. Nothing is deleted in dry-run mode.
pub fn remove_entry(
    ctx: &RunContext,
    path: &str,
    content: &mut Content<'_>,
) -> Result<RemovalOutcome> {
    let resolved = unarc_fs::resolve(ctx.target(), path);

    let Some(file) = unarc_fs::open_existing(&resolved) else {
        tracing::debug!(path, "not found in target directory");
        return Ok(RemovalOutcome::not_found(path.to_string()));
    };

    let verified = if ctx.is_verifying() {
        let archived = content.open()?;
        unarc_verify::verify(file, archived).map_err(|source| Error::Verify {
            path: path.to_string(),
            source,
        })?
    } else {
        drop(file);
        true
    };

    if !verified {
        tracing::debug!(path, "content differs from archive entry");
        return Ok(RemovalOutcome::mismatch(path.to_string()));
    }

    if ctx.is_dry_run() {
        tracing::debug!(path, "would remove (dry run)");
        return Ok(RemovalOutcome::accepted(path.to_string(), false));
    }

    unarc_fs::remove_file(&resolved)?;
    tracing::debug!(path, "removed");
    Ok(RemovalOutcome::accepted(path.to_string(), true))
}
