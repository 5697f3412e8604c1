use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::vec;

use logging::debug_log;

/// Upper bound on back-to-back cursor failures before a frame is abandoned.
///
/// A listing that keeps failing without producing names would otherwise
/// never be exhausted.
pub const MAX_CONSECUTIVE_READ_ERRORS: usize = 8;

/// One open directory on the traversal stack.
///
/// The frame owns its listing cursor; dropping the frame closes it.
pub(crate) struct DirectoryFrame<Cur> {
    path: PathBuf,
    depth: usize,
    names: Names<Cur>,
    explored: bool,
    read_failures: usize,
}

enum Names<Cur> {
    Lazy(Cur),
    Sorted {
        names: vec::IntoIter<OsString>,
        // Failure met while buffering, reported before the buffered names.
        deferred: Option<io::Error>,
    },
}

impl<Cur> DirectoryFrame<Cur>
where
    Cur: Iterator<Item = io::Result<OsString>>,
{
    /// Wraps an opened cursor. With `sort` the listing is read eagerly and
    /// ordered by name; buffering stops at the first read failure.
    pub(crate) fn new(path: PathBuf, depth: usize, cursor: Cur, sort: bool) -> Self {
        let names = if sort {
            let mut buffered = Vec::new();
            let mut deferred = None;
            for name in cursor {
                match name {
                    Ok(name) => buffered.push(name),
                    Err(error) => {
                        deferred = Some(error);
                        break;
                    }
                }
            }
            buffered.sort();
            debug_log!(Frame, 2, "buffered {} names in {:?}", buffered.len(), path);
            Names::Sorted {
                names: buffered.into_iter(),
                deferred,
            }
        } else {
            Names::Lazy(cursor)
        };

        Self {
            path,
            depth,
            names,
            explored: false,
            read_failures: 0,
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Depth of the directory itself; the root frame is 0.
    pub(crate) const fn depth(&self) -> usize {
        self.depth
    }

    /// True once a name has been requested from this frame.
    pub(crate) const fn is_explored(&self) -> bool {
        self.explored
    }

    /// Pulls the next child name. `None` means the listing is exhausted.
    pub(crate) fn next_name(&mut self) -> Option<io::Result<OsString>> {
        self.explored = true;
        let next = match &mut self.names {
            Names::Lazy(cursor) => cursor.next(),
            Names::Sorted { names, deferred } => match deferred.take() {
                Some(error) => Some(Err(error)),
                None => names.next().map(Ok),
            },
        };
        match next {
            Some(Ok(_)) => self.read_failures = 0,
            Some(Err(_)) => self.read_failures += 1,
            None => {}
        }
        next
    }

    /// True when the cursor has failed too many times in a row.
    pub(crate) const fn is_failing(&self) -> bool {
        self.read_failures >= MAX_CONSECUTIVE_READ_ERRORS
    }
}

impl<Cur> fmt::Debug for DirectoryFrame<Cur> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryFrame")
            .field("path", &self.path)
            .field("depth", &self.depth)
            .field("explored", &self.explored)
            .field("read_failures", &self.read_failures)
            .finish_non_exhaustive()
    }
}
