#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` enumerates every object beneath a root directory in pre-order,
//! one entry per call, without letting a single unreadable entry end the
//! traversal. Callers can prune the subtree of the directory they were just
//! handed before the walker descends into it.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures the root, optional per-directory name sorting,
//!   and the [`EntryClassifier`] used for every filesystem probe.
//! - [`Walker`] keeps a stack of open directory listings. Each directory's
//!   listing is opened when the directory is yielded and closed as soon as
//!   it is exhausted, skipped, or the walker is dropped.
//! - [`Walker::next_entry`] returns a [`WalkStep`]: an entry, a per-entry
//!   failure, or `Done`. The [`Iterator`] impl exposes the same sequence as
//!   `Result` values and keeps going after an `Err`.
//! - [`Walker::skip_directory`] closes the listing of the directory that was
//!   just yielded so none of its descendants are produced.
//! - Yields are logged through `logging` under the `walk` info flag. With
//!   the `tracing` feature they are also emitted on the `treewalk::walk`
//!   tracing target.
//!
//! # Invariants
//!
//! - A directory is yielded strictly before its descendants. The root itself
//!   is never yielded.
//! - Symbolic links are classified without following them and are never
//!   descended into, so traversal cannot loop.
//! - Every object reachable from the root is either yielded or reported as a
//!   failure exactly once, unless it lies beneath a skipped or failed
//!   directory.
//! - Traversal terminates. A listing that keeps failing is abandoned after
//!   [`MAX_CONSECUTIVE_READ_ERRORS`] consecutive errors.
//!
//! # Errors
//!
//! Construction fails with a [`WalkError`] when the root is missing, is not a
//! directory, or cannot be opened. During traversal, failures to classify an
//! entry, open a child directory, or read a listing are returned as
//! [`WalkStep::Failed`]; [`WalkError::is_per_entry`] distinguishes them from
//! misuse of [`Walker::skip_directory`].
//!
//! # Examples
//!
//! Walk a tree, pruning one directory and tolerating failures.
//!
//! ```
//! use walk::{WalkBuilder, WalkStep};
//! use std::fs;
//! use std::path::PathBuf;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! fs::create_dir_all(temp.path().join("cache/blobs"))?;
//! fs::create_dir(temp.path().join("src"))?;
//! fs::write(temp.path().join("src/main.rs"), b"fn main() {}")?;
//!
//! let mut walker = WalkBuilder::new(temp.path()).sort_entries(true).build()?;
//! let mut seen = Vec::new();
//! loop {
//!     match walker.next_entry() {
//!         WalkStep::Yielded(entry) => {
//!             if entry.is_dir() && entry.file_name() == Some("cache".as_ref()) {
//!                 walker.skip_directory()?;
//!             }
//!             seen.push(entry.relative_path().to_path_buf());
//!         }
//!         WalkStep::Failed(error) => eprintln!("skipping: {error}"),
//!         WalkStep::Done => break,
//!     }
//! }
//!
//! let expected: Vec<PathBuf> = ["cache", "src", "src/main.rs"]
//!     .iter()
//!     .map(PathBuf::from)
//!     .collect();
//! assert_eq!(seen, expected);
//! assert_eq!(walker.stats().skipped, 1);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! # See also
//!
//! - [`fs_ops`] for the classification primitives behind [`FsClassifier`].

mod builder;
mod classifier;
mod entry;
mod error;
mod frame;
mod stack;
mod walker;

#[cfg(test)]
mod tests;

pub use crate::builder::WalkBuilder;
pub use crate::classifier::{DirNames, EntryClassifier, FsClassifier};
pub use crate::entry::WalkEntry;
pub use crate::error::{WalkError, WalkErrorKind};
pub use crate::frame::MAX_CONSECUTIVE_READ_ERRORS;
pub use crate::walker::{WalkStats, WalkStep, Walker};
pub use fs_ops::EntryType;
