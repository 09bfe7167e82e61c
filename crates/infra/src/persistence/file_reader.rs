// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use filecmdr_ports::filesystem::FileSource;
use filecmdr_shared_kernel::{IoError, Result};

/// Convenience helpers for reading files with consistent error handling.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }
}

impl FileSource for FileReader {
    fn open(&self, path: &Path) -> Result<Box<dyn BufRead>> {
        let reader = Self::open_buffered(path).map_err(|source| IoError::FileRead { path: path.to_path_buf(), source })?;
        Ok(Box::new(reader))
    }
}
