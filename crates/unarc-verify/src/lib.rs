//! Content verification between a target-directory file and an archive entry.
//!
//! Each stream is read fully into memory and digested independently; the two
//! digests are then compared for equality. Verification never short-circuits
//! on the first differing byte.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! assert!(unarc_verify::verify(Cursor::new("hello"), Cursor::new("hello")).unwrap());
//! assert!(!unarc_verify::verify(Cursor::new("goodbye"), Cursor::new("hello")).unwrap());
//! ```

pub use self::compare::{digest_reader, verify, verify_with};
pub use self::error::{Result, Side, VerificationError};
pub use self::hasher::{Digest, Hasher, Sha256Hasher};

mod compare;
mod error;
mod hasher;
