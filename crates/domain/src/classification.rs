// crates/domain/src/classification.rs
use std::fmt;

use filecmdr_shared_kernel::{
    Credentials, FileMode, MetadataSnapshot,
    value_objects::file_mode::{S_IXGRP, S_IXOTH, S_IXUSR},
};

/// Semantic category of an inspected path; selects the offered action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileClassification {
    Directory,
    UserExecutableRegularFile,
    RegularFile,
    SymbolicLink,
    /// FIFO, character device or block device.
    Other,
    Error,
}

impl FileClassification {
    /// Leading character of the rendered mode string, `None` for [`Self::Error`].
    pub const fn type_char(self) -> Option<char> {
        match self {
            Self::Directory => Some('d'),
            Self::UserExecutableRegularFile => Some('e'),
            Self::RegularFile => Some('f'),
            Self::SymbolicLink => Some('l'),
            Self::Other => Some('o'),
            Self::Error => None,
        }
    }
}

impl fmt::Display for FileClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Directory => "directory",
            Self::UserExecutableRegularFile => "user executable file",
            Self::RegularFile => "regular file",
            Self::SymbolicLink => "symbolic link",
            Self::Other => "other",
            Self::Error => "unclassified",
        };
        f.write_str(label)
    }
}

/// Whether `invoking` may execute a file with this mode and ownership.
///
/// Only one permission class applies: owner if the uid matches, else group if
/// the gid matches, else other.
pub fn is_user_executable(mode: FileMode, owner_uid: u32, owner_gid: u32, invoking: Credentials) -> bool {
    if owner_uid == invoking.uid {
        return mode.has(S_IXUSR);
    }
    if owner_gid == invoking.gid {
        return mode.has(S_IXGRP);
    }
    mode.has(S_IXOTH)
}

/// Classifies a file; the first matching rule wins.
///
/// The executable test runs before the regular-file test and is not limited to
/// regular files, so e.g. an executable socket is reported as
/// [`FileClassification::UserExecutableRegularFile`].
pub fn classify(mode: FileMode, owner_uid: u32, owner_gid: u32, invoking: Credentials) -> FileClassification {
    if mode.is_dir() {
        FileClassification::Directory
    } else if mode.is_symlink() {
        FileClassification::SymbolicLink
    } else if mode.is_special() {
        FileClassification::Other
    } else if is_user_executable(mode, owner_uid, owner_gid, invoking) {
        FileClassification::UserExecutableRegularFile
    } else if mode.is_regular() {
        FileClassification::RegularFile
    } else {
        FileClassification::Error
    }
}

/// [`classify`] applied to a stat snapshot.
pub fn classify_snapshot(snapshot: &MetadataSnapshot, invoking: Credentials) -> FileClassification {
    classify(snapshot.mode, snapshot.uid, snapshot.gid, invoking)
}
