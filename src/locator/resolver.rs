//! Resolution of runner-reported paths to files on disk.

use std::path::{Path, PathBuf};
use tracing::trace;

use crate::core::is_regular_file;

/// Answers whether a path names an existing regular file.
///
/// `FsResolver` asks the filesystem; tests substitute an in-memory set.
pub trait PathResolver {
    fn is_file(&self, path: &Path) -> bool;
}

/// Stat-based resolver used by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsResolver;

impl PathResolver for FsResolver {
    fn is_file(&self, path: &Path) -> bool {
        is_regular_file(path)
    }
}

/// Maps a virtual `<sentinel><path>` reference to a real file.
///
/// The part after the sentinel is tried as an absolute path first, then
/// under `base_path`. Returns `None` when the sentinel is missing, the
/// remaining path is empty, or neither candidate is a regular file.
pub fn resolve_virtual_path<R: PathResolver + ?Sized>(
    resolver: &R,
    sentinel: &str,
    virtual_path: &str,
    base_path: &Path,
) -> Option<PathBuf> {
    let file_path = virtual_path.strip_prefix(sentinel)?;
    if file_path.is_empty() {
        return None;
    }

    let absolute = Path::new(file_path);
    if absolute.is_absolute() && resolver.is_file(absolute) {
        trace!(candidate = %absolute.display(), "resolved as absolute path");
        return Some(absolute.to_path_buf());
    }

    // Path::join would discard base_path for an absolute remainder.
    let relative = file_path.trim_start_matches(std::path::is_separator);
    if relative.is_empty() {
        return None;
    }
    let joined = base_path.join(relative);
    if resolver.is_file(&joined) {
        trace!(candidate = %joined.display(), "resolved under base path");
        return Some(joined);
    }

    None
}
