//! Shared test utilities for the treewalk workspace.
//!
//! [`TreeFixture`] builds a directory tree inside a temporary directory and
//! remembers every object it created, so traversal tests can compare what a
//! walker yields against the exact set of reachable paths.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Directory tree rooted inside a temporary directory.
///
/// The root itself is not part of [`expected`](Self::expected); only objects
/// beneath it are recorded.
#[derive(Debug)]
pub struct TreeFixture {
    _temp: TempDir,
    root: PathBuf,
    entries: BTreeSet<PathBuf>,
}

impl TreeFixture {
    /// Creates an empty root directory.
    #[must_use]
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let root = temp.path().join("root");
        fs::create_dir(&root).expect("create fixture root");
        Self {
            _temp: temp,
            root,
            entries: BTreeSet::new(),
        }
    }

    /// Creates the tree used by most traversal tests:
    ///
    /// ```text
    /// root/
    ///   a/
    ///     x.txt
    ///     nested/
    ///       deep.txt
    ///   b/
    ///   dir2/
    ///     inner/
    ///       leaf.txt
    ///     y.txt
    ///   top.txt
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        let mut fixture = Self::new();
        fixture.file("a/x.txt", b"x");
        fixture.file("a/nested/deep.txt", b"deep");
        fixture.dir("b");
        fixture.file("dir2/inner/leaf.txt", b"leaf");
        fixture.file("dir2/y.txt", b"y");
        fixture.file("top.txt", b"top");
        fixture
    }

    /// Returns the root directory of the tree.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `relative` against the root without creating anything.
    #[must_use]
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Creates a directory (and any missing parents) below the root.
    pub fn dir(&mut self, relative: impl AsRef<Path>) -> PathBuf {
        let path = self.path(relative.as_ref());
        fs::create_dir_all(&path).expect("create fixture directory");
        self.record(relative.as_ref());
        path
    }

    /// Writes a file below the root, creating parent directories.
    pub fn file(&mut self, relative: impl AsRef<Path>, contents: &[u8]) -> PathBuf {
        let relative = relative.as_ref();
        if let Some(parent) = relative.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.dir(parent);
        }
        let path = self.path(relative);
        fs::write(&path, contents).expect("write fixture file");
        self.record(relative);
        path
    }

    /// Creates a symbolic link below the root pointing at `target`.
    #[cfg(unix)]
    pub fn symlink(&mut self, relative: impl AsRef<Path>, target: impl AsRef<Path>) -> PathBuf {
        let relative = relative.as_ref();
        if let Some(parent) = relative.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.dir(parent);
        }
        let path = self.path(relative);
        std::os::unix::fs::symlink(target, &path).expect("create fixture symlink");
        self.record(relative);
        path
    }

    /// Returns the full path of every object created below the root.
    #[must_use]
    pub fn expected(&self) -> &BTreeSet<PathBuf> {
        &self.entries
    }

    /// Returns every created object whose path lies under `relative`,
    /// excluding `relative` itself.
    #[must_use]
    pub fn descendants_of(&self, relative: impl AsRef<Path>) -> BTreeSet<PathBuf> {
        let base = self.path(relative);
        self.entries
            .iter()
            .filter(|path| path.starts_with(&base) && **path != base)
            .cloned()
            .collect()
    }

    fn record(&mut self, relative: &Path) {
        let mut current = self.root.clone();
        for component in relative.components() {
            current.push(component);
            self.entries.insert(current.clone());
        }
    }
}

impl Default for TreeFixture {
    fn default() -> Self {
        Self::new()
    }
}
