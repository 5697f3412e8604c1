//! crates/fs_ops/src/temp.rs
//! Temporary file creation and path helpers.

use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::FsError;

const TEMP_PREFIX: &str = ".treewalk-";

/// Creates a persistent temporary file.
///
/// The file is created in `base_dir` when given, otherwise in the system
/// temporary directory. It is not deleted when the returned handle is
/// dropped; the caller owns its lifetime.
pub fn make_temp(base_dir: Option<&Path>) -> Result<(PathBuf, File), FsError> {
    let dir = base_dir.map_or_else(env::temp_dir, Path::to_path_buf);
    let named = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempfile_in(&dir)
        .map_err(|error| FsError::io("create temporary file in", &dir, error))?;

    let (file, path) = named
        .keep()
        .map_err(|error| FsError::io("persist temporary file in", &dir, error.error))?;
    Ok((path, file))
}

/// Returns the parent directory of `path`.
///
/// A bare file name has `.` as its parent, and a filesystem root is its own
/// parent.
#[must_use]
pub fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => path.to_path_buf(),
    }
}
