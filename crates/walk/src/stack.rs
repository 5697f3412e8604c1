use std::ffi::OsString;
use std::io;

use crate::frame::DirectoryFrame;

/// Open directories from the root (index 0) down to the most recently
/// entered one.
///
/// Only the top frame can be unexplored: a frame is pushed when its directory
/// is yielded and the next step reads from it before anything else.
#[derive(Debug)]
pub(crate) struct TraversalStack<Cur> {
    frames: Vec<DirectoryFrame<Cur>>,
}

impl<Cur> TraversalStack<Cur>
where
    Cur: Iterator<Item = io::Result<OsString>>,
{
    pub(crate) const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub(crate) fn push(&mut self, frame: DirectoryFrame<Cur>) {
        debug_assert!(
            self.pending().is_none(),
            "pushed {:?} above an unexplored frame",
            frame.path()
        );
        self.frames.push(frame);
    }

    pub(crate) fn pop(&mut self) -> Option<DirectoryFrame<Cur>> {
        self.frames.pop()
    }

    pub(crate) fn top(&self) -> Option<&DirectoryFrame<Cur>> {
        self.frames.last()
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut DirectoryFrame<Cur>> {
        self.frames.last_mut()
    }

    /// The frame of a directory that was yielded but not yet descended into.
    pub(crate) fn pending(&self) -> Option<&DirectoryFrame<Cur>> {
        self.top().filter(|frame| !frame.is_explored())
    }

    pub(crate) fn len(&self) -> usize {
        self.frames.len()
    }

    /// Drops every frame, closing their cursors.
    pub(crate) fn clear(&mut self) {
        self.frames.clear();
    }
}
