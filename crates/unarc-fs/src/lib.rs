//! Filesystem primitives for removing extracted archive content from a target
//! directory.
//!
//! Every function separates "nothing is there" from real failures: absence is
//! either a value (`None`, [`DirRemoval::AlreadyGone`]) or detectable through
//! [`Error::is_not_found`].

mod error;
mod path;
mod primitives;

pub use error::{Error, Result};
pub use path::{is_root, resolve};
pub use primitives::{DirRemoval, open_existing, remove_dir, remove_file, subtree_len};
