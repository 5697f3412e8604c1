use std::env;
use std::path::{Path, PathBuf};

use fs_ops::EntryType;
use logging::{debug_log, info_log};

use crate::classifier::{EntryClassifier, FsClassifier};
use crate::entry::WalkEntry;
use crate::error::WalkError;
use crate::frame::DirectoryFrame;
use crate::stack::TraversalStack;

/// Outcome of a single [`Walker::next_entry`] call.
#[derive(Debug)]
#[must_use]
pub enum WalkStep {
    /// The next entry in pre-order.
    Yielded(WalkEntry),
    /// One candidate could not be produced. The walker has moved past it.
    Failed(WalkError),
    /// Traversal is complete. Every later call returns `Done` again.
    Done,
}

impl WalkStep {
    /// Returns `true` for [`WalkStep::Done`].
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Converts the step into the shape used by the [`Iterator`] impl.
    #[must_use]
    pub fn into_result(self) -> Option<Result<WalkEntry, WalkError>> {
        match self {
            Self::Yielded(entry) => Some(Ok(entry)),
            Self::Failed(error) => Some(Err(error)),
            Self::Done => None,
        }
    }
}

/// Counters accumulated over the lifetime of a [`Walker`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WalkStats {
    /// Entries successfully yielded.
    pub yielded: u64,
    /// Yielded entries that were directories.
    pub directories: u64,
    /// Steps that returned an error.
    pub failures: u64,
    /// Directories pruned through [`Walker::skip_directory`].
    pub skipped: u64,
}

/// Pre-order iterator over the descendants of a root directory.
///
/// Each call to [`Walker::next_entry`] yields one entry, reports one failure,
/// or signals completion. Failures never end the traversal; the next call
/// resumes with the following sibling.
pub struct Walker<C: EntryClassifier = FsClassifier> {
    root: PathBuf,
    classifier: C,
    sort_entries: bool,
    stack: TraversalStack<C::Cursor>,
    current: Option<WalkEntry>,
    finished: bool,
    stats: WalkStats,
}

impl Walker {
    /// Opens a walker over `root` using the filesystem classifier.
    ///
    /// Equivalent to `WalkBuilder::new(root).build()`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Result<Self, WalkError> {
        Self::open(root.into(), FsClassifier, false)
    }
}

impl<C: EntryClassifier> Walker<C> {
    pub(crate) fn open(root: PathBuf, classifier: C, sort_entries: bool) -> Result<Self, WalkError> {
        let root = absolutize(root)?;
        debug_log!(Walk, 1, "opening walk at {:?}", root);

        match classifier.classify_target(&root) {
            Ok(EntryType::Directory) => {}
            Ok(EntryType::NotFound) => return Err(WalkError::root_not_found(root)),
            Ok(found) => return Err(WalkError::invalid_root(root, found)),
            Err(error) => return Err(WalkError::root_access(root, error)),
        }

        let cursor = match classifier.open_dir(&root) {
            Ok(cursor) => cursor,
            Err(error) => return Err(WalkError::root_access(root, error)),
        };

        let mut stack = TraversalStack::new();
        stack.push(DirectoryFrame::new(root.clone(), 0, cursor, sort_entries));

        Ok(Self {
            root,
            classifier,
            sort_entries,
            stack,
            current: None,
            finished: false,
            stats: WalkStats::default(),
        })
    }

    /// Returns the absolute traversal root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the entry produced by the most recent step, if it succeeded.
    #[must_use]
    pub const fn current(&self) -> Option<&WalkEntry> {
        self.current.as_ref()
    }

    /// Number of directories currently open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// True once [`Walker::next_entry`] has returned [`WalkStep::Done`].
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.finished
    }

    /// Returns the counters gathered so far.
    #[must_use]
    pub const fn stats(&self) -> WalkStats {
        self.stats
    }

    /// Produces the next entry in pre-order.
    ///
    /// A directory is yielded before any of its descendants and its listing
    /// is opened at that moment, so [`Walker::skip_directory`] can still
    /// discard it. When a candidate cannot be classified or opened the step
    /// returns [`WalkStep::Failed`] and the candidate is consumed.
    pub fn next_entry(&mut self) -> WalkStep {
        if self.finished {
            return WalkStep::Done;
        }
        self.current = None;

        loop {
            let Some(frame) = self.stack.top_mut() else {
                self.finish();
                return WalkStep::Done;
            };

            match frame.next_name() {
                None => {
                    debug_log!(Frame, 1, "leaving {:?}", frame.path());
                    self.stack.pop();
                }
                Some(Err(error)) => {
                    let dir = frame.path().to_path_buf();
                    if frame.is_failing() {
                        info_log!(Skip, 1, "abandoning unreadable listing of {:?}", dir);
                        self.stack.pop();
                    }
                    return self.fail(WalkError::read_dir(dir, error));
                }
                Some(Ok(name)) => {
                    let path = frame.path().join(&name);
                    let depth = frame.depth() + 1;
                    return self.visit(path, depth);
                }
            }
        }
    }

    /// Reports whether the last yielded entry is a directory.
    ///
    /// Returns `false` before the first yield, after a failed step, and once
    /// the walk is exhausted. A skipped directory still reports `true` until
    /// the next step.
    #[must_use]
    pub fn is_current_directory(&self) -> bool {
        self.current.as_ref().is_some_and(WalkEntry::is_dir)
    }

    /// Prunes the subtree of the directory that was just yielded.
    ///
    /// The directory's listing is closed and traversal continues with its
    /// next sibling. Calling this after a non-directory, after a failed step,
    /// or a second time for the same directory returns
    /// [`crate::WalkErrorKind::InvalidState`].
    pub fn skip_directory(&mut self) -> Result<(), WalkError> {
        let Some(current) = self.current.as_ref() else {
            return Err(WalkError::invalid_state("no current entry"));
        };
        if !current.is_dir() {
            return Err(WalkError::invalid_state("current entry is not a directory"));
        }

        let pending = self
            .stack
            .pending()
            .is_some_and(|frame| frame.path() == current.full_path());
        if !pending {
            return Err(WalkError::invalid_state("directory is no longer pending"));
        }

        info_log!(Skip, 1, "skipping {:?}", current.relative_path());
        self.stack.pop();
        self.stats.skipped += 1;
        Ok(())
    }

    fn visit(&mut self, path: PathBuf, depth: usize) -> WalkStep {
        let entry_type = match self.classifier.classify(&path) {
            Ok(EntryType::NotFound) => return self.fail(WalkError::vanished(path)),
            Ok(entry_type) => entry_type,
            Err(error) => return self.fail(WalkError::entry(path, error)),
        };
        debug_log!(Classify, 1, "{:?} is a {}", path, entry_type);

        if entry_type.is_dir() {
            let cursor = match self.classifier.open_dir(&path) {
                Ok(cursor) => cursor,
                Err(error) => return self.fail(WalkError::entry(path, error)),
            };
            debug_log!(Frame, 1, "entering {:?}", path);
            self.stack.push(DirectoryFrame::new(
                path.clone(),
                depth,
                cursor,
                self.sort_entries,
            ));
            self.stats.directories += 1;
        }

        let relative_path = path
            .strip_prefix(&self.root)
            .map_or_else(|_| path.clone(), Path::to_path_buf);
        info_log!(Walk, 1, "{}", relative_path.display());
        #[cfg(feature = "tracing")]
        logging::trace_walk!(depth, "{}", relative_path.display());

        let entry = WalkEntry {
            full_path: path,
            relative_path,
            entry_type,
            depth,
        };
        self.stats.yielded += 1;
        self.current = Some(entry.clone());
        WalkStep::Yielded(entry)
    }

    fn fail(&mut self, error: WalkError) -> WalkStep {
        info_log!(Skip, 2, "{}", error);
        self.current = None;
        self.stats.failures += 1;
        WalkStep::Failed(error)
    }

    fn finish(&mut self) {
        self.finished = true;
        self.stack.clear();
        let stats = self.stats;
        info_log!(
            Stats,
            1,
            "{} entries ({} directories), {} failures, {} skipped",
            stats.yielded,
            stats.directories,
            stats.failures,
            stats.skipped
        );
    }
}

impl<C: EntryClassifier> Iterator for Walker<C> {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry().into_result()
    }
}

impl<C: EntryClassifier> std::iter::FusedIterator for Walker<C> {}

impl<C: EntryClassifier> std::fmt::Debug for Walker<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Walker")
            .field("root", &self.root)
            .field("sort_entries", &self.sort_entries)
            .field("depth", &self.stack.len())
            .field("current", &self.current)
            .field("finished", &self.finished)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf, WalkError> {
    if path.is_absolute() {
        Ok(path)
    } else {
        let cwd = env::current_dir()
            .map_err(|error| WalkError::root_access(PathBuf::from("."), error))?;
        Ok(cwd.join(path))
    }
}
