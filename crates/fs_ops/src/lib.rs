#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `fs_ops` collects the stateless filesystem primitives used by the
//! `treewalk` workspace: classifying the object found at a path, querying
//! sizes, and moving, copying, removing, or creating entries. Each helper is
//! a thin wrapper over [`std::fs`] that translates failures into [`FsError`]
//! values carrying the offending path.
//!
//! # Design
//!
//! - [`classify`] and [`entry_type`] report an [`EntryType`] without following
//!   symbolic links. [`classify`] keeps the raw [`std::io::Error`] so that
//!   traversal code can tell permission failures from other I/O errors.
//! - [`exists`], [`is_directory`], and [`is_file`] follow symbolic links;
//!   [`is_symlink`] inspects the link itself.
//! - Mutating helpers refuse to overwrite an existing destination and report
//!   [`FsError::Exists`] instead.
//!
//! # Examples
//!
//! ```
//! use fs_ops::{EntryType, create_directory, entry_type, remove};
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let dir = temp.path().join("a/b");
//! assert!(create_directory(&dir)?);
//! assert_eq!(entry_type(&dir)?, EntryType::Directory);
//! assert!(remove(&temp.path().join("a"))?);
//! assert_eq!(entry_type(&dir)?, EntryType::NotFound);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod entry_type;
mod error;
mod ops;
mod temp;

pub use crate::entry_type::{
    EntryType, classify, classify_target, entry_type, exists, is_directory, is_file, is_symlink,
};
pub use crate::error::FsError;
pub use crate::ops::{copy_path, create_directory, create_symlink, move_path, remove, size};
pub use crate::temp::{make_temp, parent_dir};
