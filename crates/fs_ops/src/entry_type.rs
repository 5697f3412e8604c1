//! crates/fs_ops/src/entry_type.rs
//! Classification of filesystem objects.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use logging::debug_log;

use crate::error::{FsError, IoResultExt};

/// Kind of object found at a path.
///
/// Classification never follows symbolic links: a link is reported as
/// [`EntryType::Symlink`] whatever it points at, including dangling links.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EntryType {
    /// A directory.
    Directory,
    /// A regular file.
    File,
    /// A symbolic link.
    Symlink,
    /// A device, FIFO, socket, or any other non-regular object.
    Other,
    /// Nothing exists at the path.
    NotFound,
}

impl EntryType {
    /// Maps a [`fs::FileType`] obtained without following links.
    #[must_use]
    pub fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else if file_type.is_symlink() {
            Self::Symlink
        } else {
            Self::Other
        }
    }

    /// Returns `true` for [`EntryType::Directory`].
    #[must_use]
    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Returns `true` unless the entry is [`EntryType::NotFound`].
    #[must_use]
    pub const fn exists(self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Directory => "directory",
            Self::File => "file",
            Self::Symlink => "symlink",
            Self::Other => "special file",
            Self::NotFound => "nothing",
        };
        f.write_str(name)
    }
}

/// Classifies `path`, reporting the raw [`io::Error`] on failure.
///
/// Missing paths, including paths whose parent is not a directory, classify
/// as [`EntryType::NotFound`]. Every other failure (for example a permission
/// error on a parent directory) is returned unchanged so callers can inspect
/// its [`io::ErrorKind`].
pub fn classify(path: &Path) -> io::Result<EntryType> {
    match fs::symlink_metadata(path) {
        Ok(metadata) => Ok(EntryType::from_file_type(metadata.file_type())),
        Err(error) if is_missing(&error) => Ok(EntryType::NotFound),
        Err(error) => {
            debug_log!(Classify, 2, "classify {:?} failed: {}", path, error);
            Err(error)
        }
    }
}

/// Like [`classify`] but resolves symbolic links first.
///
/// A dangling link classifies as [`EntryType::NotFound`]. The result is never
/// [`EntryType::Symlink`].
pub fn classify_target(path: &Path) -> io::Result<EntryType> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(EntryType::from_file_type(metadata.file_type())),
        Err(error) if is_missing(&error) => Ok(EntryType::NotFound),
        Err(error) => Err(error),
    }
}

/// Checks if a path is a file, directory, symlink, or doesn't exist.
pub fn entry_type(path: &Path) -> Result<EntryType, FsError> {
    classify(path).with_action("get the type of", path)
}

/// Checks if something exists at `path`, following symbolic links.
pub fn exists(path: &Path) -> Result<bool, FsError> {
    Ok(target_metadata(path)?.is_some())
}

/// Checks if `path` points to a directory, following symbolic links.
pub fn is_directory(path: &Path) -> Result<bool, FsError> {
    Ok(target_metadata(path)?.is_some_and(|metadata| metadata.is_dir()))
}

/// Checks if `path` points to a regular file, following symbolic links.
pub fn is_file(path: &Path) -> Result<bool, FsError> {
    Ok(target_metadata(path)?.is_some_and(|metadata| metadata.is_file()))
}

/// Checks if `path` itself is a symbolic link.
pub fn is_symlink(path: &Path) -> Result<bool, FsError> {
    Ok(entry_type(path)? == EntryType::Symlink)
}

pub(crate) fn target_metadata(path: &Path) -> Result<Option<fs::Metadata>, FsError> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(Some(metadata)),
        Err(error) if is_missing(&error) => Ok(None),
        Err(error) => Err(FsError::io("inspect", path, error)),
    }
}

pub(crate) fn is_missing(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}
