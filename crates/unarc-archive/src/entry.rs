use std::fmt;
use std::io::Read;

use crate::{Error, Result};

type Opener<'a> = Box<dyn FnOnce() -> Result<Box<dyn Read + 'a>> + 'a>;

/// One item yielded by an [`EntrySource`](crate::EntrySource).
///
/// The entry borrows its source, so the next entry cannot be requested while
/// this one is alive. For tar-family archives this is what keeps content reads
/// in stream order.
pub struct Entry<'a> {
    path: String,
    kind: EntryKind,
    content: Option<Content<'a>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl<'a> Entry<'a> {
    pub fn file(path: impl Into<String>, content: Content<'a>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
            content: Some(content),
        }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
            content: None,
        }
    }

    /// Archive-internal relative path with `/` separators.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Content of a file entry; `None` for directories.
    pub fn content(&mut self) -> Option<&mut Content<'a>> {
        self.content.as_mut()
    }
}

impl fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("path", &self.path)
            .field("kind", &self.kind)
            .field("content", &self.content.as_ref().map(Content::is_consumed))
            .finish()
    }
}

enum State<'a> {
    /// Reader positioned at the entry data inside a sequential stream.
    Stream(Box<dyn Read + 'a>),
    /// Entry can be opened independently of the cursor.
    Deferred(Opener<'a>),
    Consumed,
}

/// Single-use access to a file entry's bytes.
pub struct Content<'a> {
    state: State<'a>,
}

impl<'a> Content<'a> {
    /// Content backed by the shared archive stream.
    pub fn stream(reader: impl Read + 'a) -> Self {
        Self {
            state: State::Stream(Box::new(reader)),
        }
    }

    /// Content opened on demand, for random-access formats.
    pub fn deferred(open: impl FnOnce() -> Result<Box<dyn Read + 'a>> + 'a) -> Self {
        Self {
            state: State::Deferred(Box::new(open)),
        }
    }

    pub fn is_consumed(&self) -> bool {
        matches!(self.state, State::Consumed)
    }

    /// Hand out the reader. A second call fails with [`Error::ContentConsumed`].
    pub fn open(&mut self) -> Result<Box<dyn Read + 'a>> {
        match std::mem::replace(&mut self.state, State::Consumed) {
            State::Stream(reader) => Ok(reader),
            State::Deferred(open) => open(),
            State::Consumed => Err(Error::ContentConsumed),
        }
    }
}
