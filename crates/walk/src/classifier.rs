use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use fs_ops::EntryType;
use logging::debug_log;

/// Source of entry classifications and directory listings for a walker.
///
/// The walker never touches the filesystem directly; every probe goes through
/// this trait. [`FsClassifier`] is the production implementation. Tests and
/// embedders install alternatives with [`crate::WalkBuilder::classifier`].
pub trait EntryClassifier {
    /// Lazy listing of the names found in one directory.
    ///
    /// Dropping the cursor releases the underlying handle.
    type Cursor: Iterator<Item = io::Result<OsString>>;

    /// Classifies `path` without following symbolic links.
    ///
    /// Return [`EntryType::NotFound`] for a path that no longer exists and an
    /// error for anything that prevented the inspection.
    fn classify(&self, path: &Path) -> io::Result<EntryType>;

    /// Classifies `path` after resolving symbolic links.
    ///
    /// Only used for the traversal root, which may be a link to a directory.
    fn classify_target(&self, path: &Path) -> io::Result<EntryType> {
        self.classify(path)
    }

    /// Opens a listing of the immediate children of `path`.
    fn open_dir(&self, path: &Path) -> io::Result<Self::Cursor>;
}

/// Filesystem-backed [`EntryClassifier`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FsClassifier;

impl EntryClassifier for FsClassifier {
    type Cursor = DirNames;

    fn classify(&self, path: &Path) -> io::Result<EntryType> {
        fs_ops::classify(path)
    }

    fn classify_target(&self, path: &Path) -> io::Result<EntryType> {
        fs_ops::classify_target(path)
    }

    fn open_dir(&self, path: &Path) -> io::Result<DirNames> {
        let inner = fs::read_dir(path)?;
        debug_log!(Classify, 3, "opened listing for {:?}", path);
        Ok(DirNames { inner })
    }
}

/// Names produced by [`fs::read_dir`], in the order the platform returns them.
#[derive(Debug)]
pub struct DirNames {
    inner: fs::ReadDir,
}

impl Iterator for DirNames {
    type Item = io::Result<OsString>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|entry| entry.map(|entry| entry.file_name()))
    }
}
