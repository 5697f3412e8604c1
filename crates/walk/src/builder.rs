use std::path::PathBuf;

use crate::classifier::{EntryClassifier, FsClassifier};
use crate::error::WalkError;
use crate::walker::Walker;

/// Configures a traversal rooted at a specific directory.
#[derive(Clone, Debug)]
pub struct WalkBuilder<C = FsClassifier> {
    root: PathBuf,
    sort_entries: bool,
    classifier: C,
}

impl WalkBuilder {
    /// Creates a builder that will traverse `root` with the filesystem
    /// classifier and platform enumeration order.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            sort_entries: false,
            classifier: FsClassifier,
        }
    }
}

impl<C: EntryClassifier> WalkBuilder<C> {
    /// Orders each directory's children by name before yielding them.
    ///
    /// Sorting requires reading a directory's whole listing when it is
    /// entered instead of one name per step.
    #[must_use]
    pub fn sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    /// Replaces the classifier used to inspect entries and open listings.
    #[must_use]
    pub fn classifier<D: EntryClassifier>(self, classifier: D) -> WalkBuilder<D> {
        WalkBuilder {
            root: self.root,
            sort_entries: self.sort_entries,
            classifier,
        }
    }

    /// Builds a [`Walker`] using the configured options.
    ///
    /// Fails when the root is missing, is not a directory, or cannot be
    /// opened.
    pub fn build(self) -> Result<Walker<C>, WalkError> {
        Walker::open(self.root, self.classifier, self.sort_entries)
    }
}
