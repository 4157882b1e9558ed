use std::io::Read;

use crate::entry::{Content, Entry};
use crate::format::ArchiveType;
use crate::source::EntrySource;
use crate::Result;

/// Sequential entry source over a (possibly compressed) tar stream.
pub struct TarSource<'a, R: 'a + Read> {
    entries: tar::Entries<'a, R>,
    kind: ArchiveType,
}

impl<'a, R: 'a + Read> TarSource<'a, R> {
    pub fn new(archive: &'a mut tar::Archive<R>, kind: ArchiveType) -> Result<Self> {
        Ok(Self {
            entries: archive.entries()?,
            kind,
        })
    }
}

impl<'a, R: 'a + Read> EntrySource for TarSource<'a, R> {
    fn next_entry(&mut self) -> Option<Result<Entry<'_>>> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };

            let entry_type = entry.header().entry_type();
            // Global pax headers carry metadata for later entries, not a path.
            if entry_type.is_pax_global_extensions() {
                tracing::trace!("skipping pax global header");
                continue;
            }

            let path = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
            // V7 headers have no directory type; a `\0` typeflag with a trailing
            // slash names a directory.
            let old_dir = entry.header().as_old().linkflag[0] == b'\0' && path.ends_with('/');
            return Some(Ok(if entry_type.is_dir() || old_dir {
                Entry::directory(path)
            } else {
                Entry::file(path, Content::stream(entry))
            }));
        }
    }

    fn archive_type(&self) -> ArchiveType {
        self.kind
    }
}
