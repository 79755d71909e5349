//! Locating line-oriented sources on disk.

use std::path::{Path, PathBuf};

/// Search `start_dir` and then each of its ancestors for a regular file named
/// `file_name`, returning the first match.
pub fn discover(start_dir: impl AsRef<Path>, file_name: &str) -> Option<PathBuf> {
    start_dir
        .as_ref()
        .ancestors()
        .map(|dir| dir.join(file_name))
        .find(|candidate| candidate.is_file())
}
