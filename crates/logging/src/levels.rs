//! crates/logging/src/levels.rs
//! Flag enums and level structures for info and debug verbosity.

/// Info flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfoFlag {
    /// Entries produced by a traversal.
    Walk,
    /// Pruned subtrees and entries skipped after a failure.
    Skip,
    /// Removal of files and directory trees.
    Remove,
    /// End-of-traversal statistics.
    Stats,
    /// Miscellaneous operations.
    Misc,
}

impl InfoFlag {
    /// Every info flag, in declaration order.
    pub const ALL: [Self; 5] = [Self::Walk, Self::Skip, Self::Remove, Self::Stats, Self::Misc];

    /// Returns the token used for this flag on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Skip => "skip",
            Self::Remove => "remove",
            Self::Stats => "stats",
            Self::Misc => "misc",
        }
    }
}

/// Debug flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugFlag {
    /// Iterator control flow: advancing, yielding, exhaustion.
    Walk,
    /// Directory frames being opened, popped, or discarded.
    Frame,
    /// Entry classification.
    Classify,
    /// Primitive file operations.
    Fs,
}

impl DebugFlag {
    /// Every debug flag, in declaration order.
    pub const ALL: [Self; 4] = [Self::Walk, Self::Frame, Self::Classify, Self::Fs];

    /// Returns the token used for this flag on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Frame => "frame",
            Self::Classify => "classify",
            Self::Fs => "fs",
        }
    }
}

/// Info verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfoLevels {
    /// Traversal output level.
    pub walk: u8,
    /// Skipped entries level.
    pub skip: u8,
    /// Removal operations level.
    pub remove: u8,
    /// Statistics level.
    pub stats: u8,
    /// Miscellaneous operations level.
    pub misc: u8,
}

impl InfoLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: InfoFlag) -> u8 {
        match flag {
            InfoFlag::Walk => self.walk,
            InfoFlag::Skip => self.skip,
            InfoFlag::Remove => self.remove,
            InfoFlag::Stats => self.stats,
            InfoFlag::Misc => self.misc,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: InfoFlag, level: u8) {
        match flag {
            InfoFlag::Walk => self.walk = level,
            InfoFlag::Skip => self.skip = level,
            InfoFlag::Remove => self.remove = level,
            InfoFlag::Stats => self.stats = level,
            InfoFlag::Misc => self.misc = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        for flag in InfoFlag::ALL {
            self.set(flag, level);
        }
    }
}

/// Debug verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugLevels {
    /// Iterator control flow level.
    pub walk: u8,
    /// Directory frame level.
    pub frame: u8,
    /// Classification level.
    pub classify: u8,
    /// File operation level.
    pub fs: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Walk => self.walk,
            DebugFlag::Frame => self.frame,
            DebugFlag::Classify => self.classify,
            DebugFlag::Fs => self.fs,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Walk => self.walk = level,
            DebugFlag::Frame => self.frame = level,
            DebugFlag::Classify => self.classify = level,
            DebugFlag::Fs => self.fs = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        for flag in DebugFlag::ALL {
            self.set(flag, level);
        }
    }
}
