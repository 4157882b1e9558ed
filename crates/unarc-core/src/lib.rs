//! Undo an archive extraction: remove from a target directory the files an
//! archive contains, optionally verifying content first, then sweep the
//! directories that were left empty.
//!
//! # Architecture
//!
//! - `context.rs` - `RunContext`, the per-run configuration
//! - `removal.rs` - Per-file decision: exists, verified, removed
//! - `tracker.rs` - Directory records and the post-pass sweep
//! - `outcome.rs` - Outcome records and the run summary
//! - `report.rs` - The `Reporter` seam for user-facing output
//! - `run.rs` - The single pass over an entry source
//!
//! # Example
//!
//! ```no_run
//! use unarc_core::{NullReporter, RunContext, run_archive};
//! use unarc_archive::ArchiveType;
//!
//! let ctx = RunContext::new("/opt/app").verify(true).remove_dirs(true);
//! let summary = run_archive("app.tar.gz", ArchiveType::TarGz, &ctx, &mut NullReporter)?;
//! println!("{summary}");
//! # Ok::<(), unarc_core::Error>(())
//! ```

pub use context::RunContext;
pub use error::{Error, Result};
pub use outcome::{DirSkipReason, DirectoryOutcome, RemovalOutcome, SkipReason, Summary};
pub use removal::remove_entry;
pub use report::{NullReporter, Recorder, Reporter};
pub use run::{run, run_archive};
pub use tracker::DirectoryTracker;

mod context;
mod error;
mod outcome;
mod removal;
mod report;
mod run;
mod tracker;
