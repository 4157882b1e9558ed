use std::path::{Path, PathBuf};

/// Join an archive-internal `/`-separated path onto `root`.
///
/// Segments are appended verbatim: `.` and `..` are kept as-is and nothing is
/// normalized. Empty segments (leading, doubled or trailing `/`) are dropped,
/// so an absolute archive path still lands under `root`.
pub fn resolve(root: &Path, relative: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    for segment in relative.split('/').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path
}

/// Whether `relative` names the archive root itself (`./`, `.`, `/`, or empty).
pub fn is_root(relative: &str) -> bool {
    relative
        .split('/')
        .all(|segment| segment.is_empty() || segment == ".")
}
