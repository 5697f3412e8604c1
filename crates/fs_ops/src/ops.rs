//! crates/fs_ops/src/ops.rs
//! Move, copy, remove, and create primitives.

use std::fs;
use std::io;
use std::path::Path;

use logging::{debug_log, info_log};

use crate::entry_type::{EntryType, entry_type, target_metadata};
use crate::error::{FsError, IoResultExt};

/// Returns the size in bytes of the regular file at `path`.
///
/// Symbolic links are followed.
pub fn size(path: &Path) -> Result<u64, FsError> {
    let Some(metadata) = target_metadata(path)? else {
        return Err(FsError::NotFound {
            path: path.to_path_buf(),
        });
    };
    if !metadata.is_file() {
        return Err(FsError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    Ok(metadata.len())
}

/// Moves a file, directory, or symlink.
///
/// Moving a path onto itself is a no-op. The destination must not exist.
pub fn move_path(src: &Path, dst: &Path) -> Result<(), FsError> {
    if src == dst {
        return Ok(());
    }
    ensure_vacant(dst)?;

    debug_log!(Fs, 1, "rename {:?} -> {:?}", src, dst);
    fs::rename(src, dst).with_action("move", src)
}

/// Copies a file, directory, or symlink.
///
/// Copying a path onto itself is a no-op. Directories are copied
/// recursively and symbolic links are recreated rather than followed.
pub fn copy_path(src: &Path, dst: &Path) -> Result<(), FsError> {
    if src == dst {
        return Ok(());
    }
    ensure_vacant(dst)?;

    match entry_type(src)? {
        EntryType::NotFound => Err(FsError::NotFound {
            path: src.to_path_buf(),
        }),
        EntryType::Directory => copy_directory(src, dst),
        EntryType::File => {
            debug_log!(Fs, 2, "copy file {:?} -> {:?}", src, dst);
            fs::copy(src, dst).with_action("copy", src).map(|_| ())
        }
        EntryType::Symlink => copy_symlink(src, dst),
        EntryType::Other => Err(unsupported("copy", src)),
    }
}

/// Removes a file, symlink, or directory tree.
///
/// Returns `false` when nothing existed at `path`.
pub fn remove(path: &Path) -> Result<bool, FsError> {
    match entry_type(path)? {
        EntryType::NotFound => Ok(false),
        EntryType::Directory => {
            info_log!(Remove, 2, "removing directory tree {:?}", path);
            fs::remove_dir_all(path).with_action("remove", path)?;
            Ok(true)
        }
        _ => {
            info_log!(Remove, 2, "removing {:?}", path);
            fs::remove_file(path).with_action("remove", path)?;
            Ok(true)
        }
    }
}

/// Creates a symlink at `path` pointing to `target`.
///
/// The target does not need to exist.
pub fn create_symlink(path: &Path, target: &Path) -> Result<(), FsError> {
    if entry_type(path)?.exists() {
        return Err(FsError::Exists {
            path: path.to_path_buf(),
        });
    }
    make_symlink(target, path)
}

/// Creates a directory along with any missing parents.
///
/// Returns `false` if a directory already exists at `path`.
pub fn create_directory(path: &Path) -> Result<bool, FsError> {
    if let Some(metadata) = target_metadata(path)? {
        if metadata.is_dir() {
            return Ok(false);
        }
        return Err(FsError::Exists {
            path: path.to_path_buf(),
        });
    }

    fs::create_dir_all(path).with_action("create directory", path)?;
    Ok(true)
}

fn ensure_vacant(dst: &Path) -> Result<(), FsError> {
    if entry_type(dst)?.exists() {
        return Err(FsError::Exists {
            path: dst.to_path_buf(),
        });
    }
    Ok(())
}

fn copy_directory(src: &Path, dst: &Path) -> Result<(), FsError> {
    debug_log!(Fs, 2, "copy directory {:?} -> {:?}", src, dst);
    fs::create_dir(dst).with_action("create directory", dst)?;

    for entry in fs::read_dir(src).with_action("read directory", src)? {
        let entry = entry.with_action("read entry in", src)?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        let file_type = entry.file_type().with_action("inspect", &from)?;

        match EntryType::from_file_type(file_type) {
            EntryType::Directory => copy_directory(&from, &to)?,
            EntryType::File => {
                fs::copy(&from, &to).with_action("copy", &from)?;
            }
            EntryType::Symlink => copy_symlink(&from, &to)?,
            EntryType::Other | EntryType::NotFound => return Err(unsupported("copy", &from)),
        }
    }
    Ok(())
}

fn copy_symlink(src: &Path, dst: &Path) -> Result<(), FsError> {
    let target = fs::read_link(src).with_action("read symlink", src)?;
    make_symlink(&target, dst)
}

#[cfg(unix)]
fn make_symlink(target: &Path, path: &Path) -> Result<(), FsError> {
    std::os::unix::fs::symlink(target, path).with_action("create symlink", path)
}

#[cfg(windows)]
fn make_symlink(target: &Path, path: &Path) -> Result<(), FsError> {
    let resolved = path.parent().map_or_else(|| target.to_path_buf(), |p| p.join(target));
    let result = if resolved.is_dir() {
        std::os::windows::fs::symlink_dir(target, path)
    } else {
        std::os::windows::fs::symlink_file(target, path)
    };
    result.with_action("create symlink", path)
}

fn unsupported(action: &'static str, path: &Path) -> FsError {
    FsError::io(
        action,
        path,
        io::Error::new(io::ErrorKind::Unsupported, "special files are not supported"),
    )
}
