//! crates/fs_ops/src/error.rs
//! Error type shared by the primitive file operations.

use std::io;
use std::path::{Path, PathBuf};

/// Error returned by the primitive file operations.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// Nothing exists at the path.
    #[error("'{}' does not exist", .path.display())]
    NotFound {
        /// Path that was expected to exist.
        path: PathBuf,
    },

    /// The path exists but does not refer to a regular file.
    #[error("'{}' is not a regular file", .path.display())]
    NotAFile {
        /// Offending path.
        path: PathBuf,
    },

    /// The destination of a create/move/copy is already occupied.
    #[error("'{}' already exists", .path.display())]
    Exists {
        /// Occupied path.
        path: PathBuf,
    },

    /// The operating system rejected the operation.
    #[error("failed to {action} '{}': {source}", .path.display())]
    Io {
        /// Short description of the attempted operation.
        action: &'static str,
        /// Path the operation was applied to.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Creates an I/O error with operation and path context.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Returns the filesystem path associated with the error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::NotAFile { path }
            | Self::Exists { path }
            | Self::Io { path, .. } => path,
        }
    }

    /// Returns the [`io::ErrorKind`] that best describes the failure.
    #[must_use]
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::NotFound { .. } => io::ErrorKind::NotFound,
            Self::NotAFile { .. } => io::ErrorKind::InvalidInput,
            Self::Exists { .. } => io::ErrorKind::AlreadyExists,
            Self::Io { source, .. } => source.kind(),
        }
    }
}

/// Extension trait for mapping I/O results to [`FsError`] with path context.
pub(crate) trait IoResultExt<T> {
    /// Maps an I/O error to [`FsError::Io`] with the given action and path.
    fn with_action(self, action: &'static str, path: &Path) -> Result<T, FsError>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_action(self, action: &'static str, path: &Path) -> Result<T, FsError> {
        self.map_err(|error| FsError::io(action, path, error))
    }
}
