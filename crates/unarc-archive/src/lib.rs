//! Single-pass entry iteration over tar, compressed tar and zip archives.
//!
//! # Architecture
//!
//! - `format.rs` - Archive types and tar decompression codecs
//! - `entry.rs` - Entries and their single-use content
//! - `source/` - The `EntrySource` trait and per-format implementations
//!
//! # Example
//!
//! ```no_run
//! use unarc_archive::{Archive, ArchiveType, EntrySource};
//!
//! let mut archive = Archive::open("pkg.tar.gz", ArchiveType::TarGz)?;
//! let mut entries = archive.entries()?;
//! while let Some(entry) = entries.next_entry() {
//!     let entry = entry?;
//!     println!("{} (dir: {})", entry.path(), entry.is_dir());
//! }
//! # Ok::<(), unarc_archive::Error>(())
//! ```

pub use entry::{Content, Entry, EntryKind};
pub use error::{Error, Result};
pub use format::{ArchiveType, Decoder, TarCompress};
pub use source::{Archive, Entries, EntrySource, TarSource, ZipSource};

mod entry;
mod error;
mod format;
mod source;
