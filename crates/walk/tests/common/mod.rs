//! Classifier that injects failures for chosen paths.
//!
//! Permission bits are ignored when tests run as root, so failure handling is
//! exercised through this wrapper rather than `chmod`.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::vec;

use walk::{EntryClassifier, EntryType, FsClassifier};

#[derive(Clone, Copy, Debug)]
enum ReadFailures {
    First(usize),
    Forever,
}

#[derive(Clone, Debug, Default)]
pub struct FaultyClassifier {
    deny_classify: HashSet<PathBuf>,
    deny_open: HashSet<PathBuf>,
    vanished: HashSet<PathBuf>,
    failing_reads: HashMap<PathBuf, ReadFailures>,
    open_cursors: Rc<Cell<usize>>,
    classify_calls: Rc<Cell<usize>>,
}

impl FaultyClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifying `path` fails with `PermissionDenied`.
    pub fn deny_classify(mut self, path: impl Into<PathBuf>) -> Self {
        self.deny_classify.insert(path.into());
        self
    }

    /// Opening the listing of `path` fails with `PermissionDenied`.
    pub fn deny_open(mut self, path: impl Into<PathBuf>) -> Self {
        self.deny_open.insert(path.into());
        self
    }

    /// `path` classifies as missing, as if removed after being listed.
    pub fn vanish(mut self, path: impl Into<PathBuf>) -> Self {
        self.vanished.insert(path.into());
        self
    }

    /// The first `count` reads from the listing of `path` fail.
    pub fn fail_reads(mut self, path: impl Into<PathBuf>, count: usize) -> Self {
        self.failing_reads
            .insert(path.into(), ReadFailures::First(count));
        self
    }

    /// Every read from the listing of `path` fails.
    pub fn break_listing(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing_reads.insert(path.into(), ReadFailures::Forever);
        self
    }

    /// Shared counter of listings that are currently open.
    pub fn open_cursors(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.open_cursors)
    }

    /// Shared counter of `classify` calls.
    pub fn classify_calls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.classify_calls)
    }
}

impl EntryClassifier for FaultyClassifier {
    type Cursor = CountedCursor;

    fn classify(&self, path: &Path) -> io::Result<EntryType> {
        self.classify_calls.set(self.classify_calls.get() + 1);
        if self.deny_classify.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "injected classify failure",
            ));
        }
        if self.vanished.contains(path) {
            return Ok(EntryType::NotFound);
        }
        FsClassifier.classify(path)
    }

    fn open_dir(&self, path: &Path) -> io::Result<CountedCursor> {
        if self.deny_open.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "injected open failure",
            ));
        }
        let mut names = fs::read_dir(path)?
            .map(|entry| entry.map(|entry| entry.file_name()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();

        self.open_cursors.set(self.open_cursors.get() + 1);
        Ok(CountedCursor {
            names: names.into_iter(),
            failures: self.failing_reads.get(path).copied(),
            gauge: Rc::clone(&self.open_cursors),
        })
    }
}

/// Listing in name order that decrements the open-cursor gauge on drop.
pub struct CountedCursor {
    names: vec::IntoIter<OsString>,
    failures: Option<ReadFailures>,
    gauge: Rc<Cell<usize>>,
}

impl Iterator for CountedCursor {
    type Item = io::Result<OsString>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.failures {
            Some(ReadFailures::Forever) => {
                return Some(Err(io::Error::other("injected read failure")));
            }
            Some(ReadFailures::First(remaining)) if remaining > 0 => {
                self.failures = Some(ReadFailures::First(remaining - 1));
                return Some(Err(io::Error::other("injected read failure")));
            }
            _ => {}
        }
        self.names.next().map(Ok)
    }
}

impl Drop for CountedCursor {
    fn drop(&mut self) {
        self.gauge.set(self.gauge.get() - 1);
    }
}
