use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use fs_ops::EntryType;

/// Entry yielded by a successful traversal step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalkEntry {
    pub(crate) full_path: PathBuf,
    pub(crate) relative_path: PathBuf,
    pub(crate) entry_type: EntryType,
    pub(crate) depth: usize,
}

impl WalkEntry {
    /// Returns the absolute path to the filesystem entry.
    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Returns the path relative to the traversal root.
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Returns the classification captured when the entry was produced.
    ///
    /// Classification does not follow symbolic links, so a link to a directory
    /// reports [`EntryType::Symlink`].
    #[must_use]
    pub const fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    /// Reports whether the entry is a directory the walker will descend into.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.entry_type.is_dir()
    }

    /// Returns the depth of the entry. Children of the root have depth 1.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the final component of the entry's path.
    ///
    /// # Examples
    ///
    /// ```
    /// use walk::WalkBuilder;
    /// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
    /// let temp = tempfile::tempdir()?;
    /// std::fs::write(temp.path().join("notes.txt"), b"data")?;
    /// let mut walker = WalkBuilder::new(temp.path()).build()?;
    /// let entry = walker.next().unwrap()?;
    /// assert_eq!(entry.file_name().unwrap(), "notes.txt");
    /// assert!(!entry.is_dir());
    /// # Ok(())
    /// # }
    /// # demo().unwrap();
    /// ```
    #[must_use]
    pub fn file_name(&self) -> Option<&OsStr> {
        self.full_path.file_name()
    }

    /// Consumes the entry and returns its absolute path.
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.full_path
    }
}
