use std::io::Read;

use crate::error::{Result, Side, VerificationError};
use crate::hasher::{Digest, Hasher, Sha256Hasher};

/// Read `reader` to the end into memory and digest the whole buffer.
pub fn digest_reader<H: Hasher + Default>(mut reader: impl Read) -> std::io::Result<Digest> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    let mut hasher = H::default();
    hasher.update(&data);
    Ok(hasher.finalize())
}

/// Digest both streams independently and compare the digests.
///
/// Both sides are always read in full; there is no early exit on the
/// first differing byte. A read failure on either side is an error, never
/// a mismatch.
pub fn verify_with<H: Hasher + Default>(target: impl Read, archived: impl Read) -> Result<bool> {
    let target = digest_reader::<H>(target).map_err(|source| VerificationError::Read {
        side: Side::Target,
        source,
    })?;
    let archived = digest_reader::<H>(archived).map_err(|source| VerificationError::Read {
        side: Side::Archive,
        source,
    })?;

    let matched = target == archived;
    tracing::trace!(%target, %archived, matched, "compared digests");
    Ok(matched)
}

/// [`verify_with`] using SHA-256.
pub fn verify(target: impl Read, archived: impl Read) -> Result<bool> {
    verify_with::<Sha256Hasher>(target, archived)
}
