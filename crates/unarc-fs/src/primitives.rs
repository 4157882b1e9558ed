use std::fs::{self, File};
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Error, Result, is_absent, is_missing};

/// Outcome of [`remove_dir`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirRemoval {
    Removed,
    AlreadyGone,
}

/// Open `path` for reading.
///
/// Any failure to open counts as nothing being there. Failures other than
/// absence are logged.
pub fn open_existing(path: impl AsRef<Path>) -> Option<File> {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => Some(file),
        Err(e) if is_absent(&e) => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot open target path");
            None
        }
    }
}

pub fn remove_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::remove_file(path).map_err(|source| Error::RemoveFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Remove an empty directory. Absence is reported, not treated as failure;
/// a non-directory at `path` is an error.
pub fn remove_dir(path: impl AsRef<Path>) -> Result<DirRemoval> {
    let path = path.as_ref();
    match fs::remove_dir(path) {
        Ok(()) => Ok(DirRemoval::Removed),
        Err(e) if is_missing(&e) => Ok(DirRemoval::AlreadyGone),
        Err(source) => Err(Error::RemoveDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Count every entry under `path`, including `path` itself.
///
/// Returns `None` if `path` does not exist. Symlinks are counted, not followed.
pub fn subtree_len(path: impl AsRef<Path>) -> Result<Option<usize>> {
    let path = path.as_ref();
    match fs::symlink_metadata(path) {
        Ok(_) => {}
        Err(e) if is_absent(&e) => return Ok(None),
        Err(source) => {
            return Err(Error::Inspect {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    let mut count = 0;
    for entry in WalkDir::new(path) {
        entry.map_err(|source| Error::Walk {
            path: path.to_path_buf(),
            source,
        })?;
        count += 1;
    }
    Ok(Some(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_existing_missing() {
        let dir = tempdir().unwrap();
        assert!(open_existing(dir.path().join("nope")).is_none());
    }

    #[test]
    fn test_open_existing_under_a_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain");
        std::fs::write(&file, "x").unwrap();
        // `plain/child` cannot exist because `plain` is a file.
        assert!(open_existing(file.join("child")).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_open_existing_symlink_loop() {
        let dir = tempdir().unwrap();
        let link = dir.path().join("loop.txt");
        std::os::unix::fs::symlink(&link, &link).unwrap();
        assert!(open_existing(&link).is_none());
    }

    #[test]
    fn test_remove_dir_on_a_file_is_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("was-a-dir");
        std::fs::write(&file, "x").unwrap();

        let err = remove_dir(&file).unwrap_err();
        assert!(matches!(err, Error::RemoveDir { .. }));
        assert!(file.exists());
    }

    #[test]
    fn test_remove_dir_already_gone() -> Result<()> {
        let dir = tempdir().unwrap();
        assert_eq!(remove_dir(dir.path().join("gone"))?, DirRemoval::AlreadyGone);
        Ok(())
    }

    #[test]
    fn test_remove_dir_not_empty_is_error() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("f"), "x").unwrap();

        let err = remove_dir(&sub).unwrap_err();
        assert!(matches!(err, Error::RemoveDir { .. }));
        assert!(!err.is_not_found());
        assert_eq!(err.path(), sub.as_path());
    }

    #[test]
    fn test_remove_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = remove_file(dir.path().join("missing")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_subtree_len() -> Result<()> {
        let dir = tempdir().unwrap();
        let root = dir.path().join("root");
        std::fs::create_dir_all(root.join("a/b")).unwrap();
        std::fs::write(root.join("a/file"), "x").unwrap();

        assert_eq!(subtree_len(&root)?, Some(4));
        assert_eq!(subtree_len(root.join("a/b"))?, Some(1));
        assert_eq!(subtree_len(root.join("missing"))?, None);
        Ok(())
    }
}
