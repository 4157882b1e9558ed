use std::io::{Read, Seek};

use zip::ZipArchive;

use crate::entry::{Content, Entry};
use crate::format::ArchiveType;
use crate::source::EntrySource;
use crate::Result;

/// Entry source over a zip central directory.
///
/// Entries are listed by index. File content is opened lazily from the
/// archive when requested, so skipping an entry never decompresses it.
pub struct ZipSource<'a, R: Read + Seek> {
    archive: &'a mut ZipArchive<R>,
    index: usize,
}

impl<'a, R: Read + Seek> ZipSource<'a, R> {
    pub fn new(archive: &'a mut ZipArchive<R>) -> Self {
        Self { archive, index: 0 }
    }
}

fn open_index<'s, R: Read + Seek>(
    archive: &'s mut ZipArchive<R>,
    index: usize,
) -> Result<Box<dyn Read + 's>> {
    let file = archive.by_index(index)?;
    Ok(Box::new(file))
}

impl<R: Read + Seek> EntrySource for ZipSource<'_, R> {
    fn next_entry(&mut self) -> Option<Result<Entry<'_>>> {
        if self.index >= self.archive.len() {
            return None;
        }
        let index = self.index;
        self.index += 1;

        let (path, is_dir) = match self.archive.by_index(index) {
            Ok(file) => (file.name().to_string(), file.is_dir()),
            Err(e) => return Some(Err(e.into())),
        };
        if is_dir {
            return Some(Ok(Entry::directory(path)));
        }

        let archive = &mut *self.archive;
        let content = Content::deferred(move || {
            // Move the borrow in so the reader may outlive this call.
            let archive = archive;
            open_index(archive, index)
        });
        Some(Ok(Entry::file(path, content)))
    }

    fn archive_type(&self) -> ArchiveType {
        ArchiveType::Zip
    }
}
