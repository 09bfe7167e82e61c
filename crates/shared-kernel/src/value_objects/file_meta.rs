// crates/shared-kernel/src/value_objects/file_meta.rs
use super::{FileMode, FileSize};

/// Metadata captured by a single non-following stat call.
///
/// Owned by the inspection that fetched it and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataSnapshot {
    pub mode: FileMode,
    pub uid: u32,
    pub gid: u32,
    pub size: FileSize,
    /// Seconds since the Unix epoch.
    pub mtime: i64,
}
