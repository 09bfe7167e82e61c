// crates/ports/src/filesystem.rs
use std::{
    io::BufRead,
    path::{Path, PathBuf},
};

use filecmdr_shared_kernel::{MetadataSnapshot, Result};

/// Port for fetching metadata without following a final symbolic link.
pub trait MetadataSource {
    fn stat(&self, path: &Path) -> Result<MetadataSnapshot>;
}

/// Port for scanning a directory.
pub trait DirectoryScanner {
    /// Entry names (not joined with `path`), sorted by their bytes.
    fn entries(&self, path: &Path) -> Result<Vec<PathBuf>>;
}

/// Port for reading a file's contents.
pub trait FileSource {
    fn open(&self, path: &Path) -> Result<Box<dyn BufRead>>;
}

/// Port for the process-wide current directory.
pub trait WorkingDirectory {
    /// Makes `path` the base for later relative lookups. Not restored afterwards.
    fn change_to(&self, path: &Path) -> Result<()>;
}
