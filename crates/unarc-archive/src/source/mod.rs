//! Entry sources: one uniform, single-pass view over every supported format.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use crate::entry::Entry;
use crate::format::{ArchiveType, Decoder};
use crate::{Error, Result};

mod tar;
mod zip;

pub use self::tar::TarSource;
pub use self::zip::ZipSource;

/// A finite, ordered, non-restartable sequence of archive entries.
///
/// Each yielded [`Entry`] borrows the source mutably, so it must be dropped
/// before the next one is requested. The first error ends the traversal.
pub trait EntrySource {
    fn next_entry(&mut self) -> Option<Result<Entry<'_>>>;

    fn archive_type(&self) -> ArchiveType;
}

impl<S: EntrySource + ?Sized> EntrySource for &mut S {
    fn next_entry(&mut self) -> Option<Result<Entry<'_>>> {
        (**self).next_entry()
    }

    fn archive_type(&self) -> ArchiveType {
        (**self).archive_type()
    }
}

/// An opened archive of any supported type.
pub enum Archive<R: Read + Seek> {
    Tar {
        archive: ::tar::Archive<Decoder<R>>,
        kind: ArchiveType,
    },
    Zip(::zip::ZipArchive<R>),
}

impl Archive<BufReader<File>> {
    /// Open the archive at `path` as `kind`.
    pub fn open(path: impl AsRef<Path>, kind: ArchiveType) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), %kind, "opened archive");
        Self::from_reader(BufReader::new(file), kind)
    }
}

impl<R: Read + Seek> Archive<R> {
    pub fn from_reader(reader: R, kind: ArchiveType) -> Result<Self> {
        match kind.tar_compress() {
            Some(codec) => Ok(Self::Tar {
                archive: ::tar::Archive::new(codec.decoder(reader)),
                kind,
            }),
            None => Ok(Self::Zip(::zip::ZipArchive::new(reader)?)),
        }
    }

    pub fn archive_type(&self) -> ArchiveType {
        match self {
            Self::Tar { kind, .. } => *kind,
            Self::Zip(_) => ArchiveType::Zip,
        }
    }

    /// Start the single pass over this archive's entries.
    pub fn entries(&mut self) -> Result<Entries<'_, R>> {
        match self {
            Self::Tar { archive, kind } => Ok(Entries::Tar(TarSource::new(archive, *kind)?)),
            Self::Zip(archive) => Ok(Entries::Zip(ZipSource::new(archive))),
        }
    }
}

/// Format-erased entry sequence returned by [`Archive::entries`].
pub enum Entries<'a, R: Read + Seek> {
    Tar(TarSource<'a, Decoder<R>>),
    Zip(ZipSource<'a, R>),
}

impl<R: Read + Seek> EntrySource for Entries<'_, R> {
    fn next_entry(&mut self) -> Option<Result<Entry<'_>>> {
        match self {
            Self::Tar(source) => source.next_entry(),
            Self::Zip(source) => source.next_entry(),
        }
    }

    fn archive_type(&self) -> ArchiveType {
        match self {
            Self::Tar(source) => source.archive_type(),
            Self::Zip(source) => source.archive_type(),
        }
    }
}
