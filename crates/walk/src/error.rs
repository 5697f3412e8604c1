use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use fs_ops::EntryType;

/// Error returned when constructing a walker or producing an entry.
///
/// Construction errors mean no walker exists. Per-entry errors describe one
/// inaccessible candidate; the walker has already moved past it and the next
/// call continues with the following sibling. [`WalkErrorKind::InvalidState`]
/// reports a misuse of [`crate::Walker::skip_directory`].
#[derive(Debug)]
pub struct WalkError {
    kind: WalkErrorKind,
}

impl WalkError {
    pub(crate) const fn new(kind: WalkErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) const fn root_not_found(path: PathBuf) -> Self {
        Self::new(WalkErrorKind::RootNotFound { path })
    }

    pub(crate) const fn invalid_root(path: PathBuf, found: EntryType) -> Self {
        Self::new(WalkErrorKind::InvalidRoot { path, found })
    }

    pub(crate) const fn root_access(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::RootAccess { path, source })
    }

    pub(crate) const fn vanished(path: PathBuf) -> Self {
        Self::new(WalkErrorKind::NotFound { path })
    }

    /// Maps a failure to classify or open a single entry by its
    /// [`io::ErrorKind`].
    pub(crate) fn entry(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => {
                Self::new(WalkErrorKind::PermissionDenied { path, source })
            }
            io::ErrorKind::NotFound => Self::vanished(path),
            _ => Self::new(WalkErrorKind::Io { path, source }),
        }
    }

    pub(crate) const fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::ReadDir { path, source })
    }

    pub(crate) const fn invalid_state(reason: &'static str) -> Self {
        Self::new(WalkErrorKind::InvalidState { reason })
    }

    /// Returns the specific failure.
    #[must_use]
    pub const fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }

    /// Returns the filesystem path associated with the error.
    ///
    /// Every variant except [`WalkErrorKind::InvalidState`] names a path, so
    /// callers can forward it directly into diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use walk::Walker;
    ///
    /// let error = match Walker::new("./definitely_missing_root") {
    ///     Ok(_) => panic!("missing root yields error"),
    ///     Err(error) => error,
    /// };
    /// assert!(error.path().unwrap().ends_with("definitely_missing_root"));
    /// ```
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.kind.path()
    }

    /// Indicates a failure scoped to one candidate entry.
    ///
    /// The walker remains usable; calling it again resumes at the next
    /// sibling.
    #[must_use]
    pub const fn is_per_entry(&self) -> bool {
        matches!(
            self.kind,
            WalkErrorKind::NotFound { .. }
                | WalkErrorKind::PermissionDenied { .. }
                | WalkErrorKind::Io { .. }
                | WalkErrorKind::ReadDir { .. }
        )
    }

    /// Indicates that the walker could not be constructed.
    #[must_use]
    pub const fn is_construction(&self) -> bool {
        matches!(
            self.kind,
            WalkErrorKind::RootNotFound { .. }
                | WalkErrorKind::InvalidRoot { .. }
                | WalkErrorKind::RootAccess { .. }
        )
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.kind.source()
    }
}

/// Classification of walker failures.
#[derive(Debug, thiserror::Error)]
pub enum WalkErrorKind {
    /// Nothing exists at the traversal root.
    #[error("traversal root '{}' does not exist", .path.display())]
    RootNotFound {
        /// Requested root.
        path: PathBuf,
    },

    /// The traversal root exists but is not a directory.
    #[error("traversal root '{}' is a {found}, not a directory", .path.display())]
    InvalidRoot {
        /// Requested root.
        path: PathBuf,
        /// What was found instead.
        found: EntryType,
    },

    /// The traversal root could not be inspected or opened.
    #[error("failed to open traversal root '{}': {source}", .path.display())]
    RootAccess {
        /// Requested root.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },

    /// An entry listed by its parent no longer exists.
    #[error("'{}' vanished during traversal", .path.display())]
    NotFound {
        /// Path of the vanished entry.
        path: PathBuf,
    },

    /// Access to an entry was refused.
    #[error("permission denied for '{}': {source}", .path.display())]
    PermissionDenied {
        /// Path of the inaccessible entry.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },

    /// Any other failure to classify or open an entry.
    #[error("failed to access '{}': {source}", .path.display())]
    Io {
        /// Path of the failing entry.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },

    /// Failed to obtain the next name from a directory listing.
    #[error("failed to read entry in '{}': {source}", .path.display())]
    ReadDir {
        /// Directory whose listing failed.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },

    /// A walker operation was called when its precondition did not hold.
    #[error("invalid walker state: {reason}")]
    InvalidState {
        /// Which precondition was violated.
        reason: &'static str,
    },
}

impl WalkErrorKind {
    /// Returns the filesystem path tied to the failure, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::RootNotFound { path }
            | Self::InvalidRoot { path, .. }
            | Self::RootAccess { path, .. }
            | Self::NotFound { path }
            | Self::PermissionDenied { path, .. }
            | Self::Io { path, .. }
            | Self::ReadDir { path, .. } => Some(path),
            Self::InvalidState { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_error(kind: io::ErrorKind, message: &'static str) -> io::Error {
        io::Error::new(kind, message)
    }

    #[test]
    fn entry_errors_are_mapped_by_io_kind() {
        let denied = WalkError::entry(
            PathBuf::from("locked"),
            io_error(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(
            denied.kind(),
            WalkErrorKind::PermissionDenied { .. }
        ));

        let gone = WalkError::entry(
            PathBuf::from("gone"),
            io_error(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(gone.kind(), WalkErrorKind::NotFound { .. }));

        let other = WalkError::entry(PathBuf::from("bad"), io::Error::other("boom"));
        assert!(matches!(other.kind(), WalkErrorKind::Io { .. }));
    }

    #[test]
    fn display_is_specific_per_variant() {
        assert_eq!(
            WalkError::root_not_found(PathBuf::from("root")).to_string(),
            "traversal root 'root' does not exist"
        );
        assert_eq!(
            WalkError::invalid_root(PathBuf::from("f"), EntryType::File).to_string(),
            "traversal root 'f' is a file, not a directory"
        );
        assert_eq!(
            WalkError::vanished(PathBuf::from("x")).to_string(),
            "'x' vanished during traversal"
        );
        assert_eq!(
            WalkError::read_dir(PathBuf::from("dir"), io::Error::other("boom")).to_string(),
            "failed to read entry in 'dir': boom"
        );
        assert_eq!(
            WalkError::invalid_state("no current entry").to_string(),
            "invalid walker state: no current entry"
        );
    }

    #[test]
    fn categories_partition_the_variants() {
        let construction = WalkError::root_access(PathBuf::from("r"), io::Error::other("x"));
        assert!(construction.is_construction());
        assert!(!construction.is_per_entry());

        let per_entry = WalkError::read_dir(PathBuf::from("d"), io::Error::other("x"));
        assert!(per_entry.is_per_entry());
        assert!(!per_entry.is_construction());

        let misuse = WalkError::invalid_state("not a directory");
        assert!(!misuse.is_per_entry());
        assert!(!misuse.is_construction());
        assert!(misuse.path().is_none());
    }

    #[test]
    fn source_refers_to_underlying_io_error() {
        let error = WalkError::entry(
            PathBuf::from("locked"),
            io_error(io::ErrorKind::PermissionDenied, "source"),
        );
        let source_ref = error
            .source()
            .and_then(|err| err.downcast_ref::<io::Error>())
            .expect("walk error should expose the underlying io::Error");
        assert_eq!(source_ref.to_string(), "source");
        assert_eq!(error.path(), Some(Path::new("locked")));
    }
}
