use std::fmt;
use std::io::Read;
use std::str::FromStr;

use crate::Error;

/// The archive formats an entry source can walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArchiveType {
    Tar,
    TarGz,
    TarBz2,
    TarXz,
    Zip,
}

/// Recognised suffixes and the type each one names.
const SUFFIXES: &[(&str, ArchiveType)] = &[
    (".tar.bz2", ArchiveType::TarBz2),
    (".tar.gz", ArchiveType::TarGz),
    (".tar.xz", ArchiveType::TarXz),
    (".tbz2", ArchiveType::TarBz2),
    (".tbz", ArchiveType::TarBz2),
    (".tgz", ArchiveType::TarGz),
    (".txz", ArchiveType::TarXz),
    (".tar", ArchiveType::Tar),
    (".zip", ArchiveType::Zip),
];

impl ArchiveType {
    pub const ALL: [ArchiveType; 5] = [
        ArchiveType::Tar,
        ArchiveType::TarBz2,
        ArchiveType::TarGz,
        ArchiveType::TarXz,
        ArchiveType::Zip,
    ];

    /// Infer the type from a file name by suffix, ignoring ASCII case.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        SUFFIXES
            .iter()
            .find(|(suffix, _)| lower.ends_with(suffix))
            .map(|(_, kind)| *kind)
    }

    /// Canonical suffix, also used as the `--type` hint.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Tar => ".tar",
            Self::TarGz => ".tar.gz",
            Self::TarBz2 => ".tar.bz2",
            Self::TarXz => ".tar.xz",
            Self::Zip => ".zip",
        }
    }

    /// Compression layer under the tar stream, `None` for zip.
    pub fn tar_compress(self) -> Option<TarCompress> {
        match self {
            Self::Tar => Some(TarCompress::None),
            Self::TarGz => Some(TarCompress::Gzip),
            Self::TarBz2 => Some(TarCompress::Bzip2),
            Self::TarXz => Some(TarCompress::Xz),
            Self::Zip => None,
        }
    }

    /// Tar-family entries share the stream cursor and must be read in order.
    pub fn is_sequential(self) -> bool {
        self.tar_compress().is_some()
    }
}

impl fmt::Display for ArchiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for ArchiveType {
    type Err = Error;

    /// Parse an explicit type token such as `tar.gz`, `.tgz` or `ZIP`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let token = lower.strip_prefix('.').unwrap_or(&lower);
        SUFFIXES
            .iter()
            .find(|(suffix, _)| &suffix[1..] == token)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| Error::UnrecognizedType(s.to_string()))
    }
}

/// Compression codec for tar archives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TarCompress {
    None,
    Gzip,
    Bzip2,
    Xz,
}

impl TarCompress {
    /// Wrap `reader` in the decoder for this codec.
    pub fn decoder<R: Read>(self, reader: R) -> Decoder<R> {
        match self {
            Self::None => Decoder::Passthrough(reader),
            Self::Gzip => Decoder::Gzip(Box::new(flate2::read::GzDecoder::new(reader))),
            Self::Bzip2 => Decoder::Bzip2(Box::new(bzip2::read::BzDecoder::new(reader))),
            Self::Xz => Decoder::Xz(Box::new(xz2::read::XzDecoder::new(reader))),
        }
    }
}

/// Decoder wrapper for tar decompression.
pub enum Decoder<R: Read> {
    Passthrough(R),
    Gzip(Box<flate2::read::GzDecoder<R>>),
    Bzip2(Box<bzip2::read::BzDecoder<R>>),
    Xz(Box<xz2::read::XzDecoder<R>>),
}

impl<R: Read> fmt::Debug for Decoder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codec = match self {
            Self::Passthrough(_) => "Passthrough",
            Self::Gzip(_) => "Gzip",
            Self::Bzip2(_) => "Bzip2",
            Self::Xz(_) => "Xz",
        };
        f.debug_tuple("Decoder").field(&codec).finish()
    }
}

impl<R: Read> Read for Decoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Self::Passthrough(r) => r.read(buf),
            Self::Gzip(d) => d.read(buf),
            Self::Bzip2(d) => d.read(buf),
            Self::Xz(d) => d.read(buf),
        }
    }
}
