// crates/infra/src/filesystem.rs
use std::{
    ffi::OsString,
    os::unix::{ffi::OsStrExt, fs::MetadataExt},
    path::{Path, PathBuf},
};

use filecmdr_ports::filesystem::{DirectoryScanner, MetadataSource, WorkingDirectory};
use filecmdr_shared_kernel::{FileMode, FileSize, IoError, MetadataError, MetadataSnapshot, Result};
use log::trace;

/// Filesystem adapter over `lstat`, `readdir` and `chdir`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnixFileSystem;

impl UnixFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataSource for UnixFileSystem {
    fn stat(&self, path: &Path) -> Result<MetadataSnapshot> {
        // symlink_metadata so links are described, not their targets
        let metadata = std::fs::symlink_metadata(path)
            .map_err(|source| MetadataError::Stat { path: path.to_path_buf(), source })?;

        Ok(MetadataSnapshot {
            mode: FileMode::new(metadata.mode()),
            uid: metadata.uid(),
            gid: metadata.gid(),
            size: FileSize::new(metadata.size()),
            mtime: metadata.mtime(),
        })
    }
}

impl DirectoryScanner for UnixFileSystem {
    /// Includes `.` and `..` the way `scandir(3)` reports them, ordered by
    /// raw name bytes.
    fn entries(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let read_dir_error = |source: std::io::Error| IoError::ReadDir { path: path.to_path_buf(), source };

        let mut names: Vec<PathBuf> = vec![PathBuf::from("."), PathBuf::from("..")];
        for entry in std::fs::read_dir(path).map_err(read_dir_error)? {
            let name: OsString = entry.map_err(read_dir_error)?.file_name();
            names.push(PathBuf::from(name));
        }

        names.sort_by(|a, b| a.as_os_str().as_bytes().cmp(b.as_os_str().as_bytes()));
        trace!("scanned {} entries in {}", names.len(), path.display());
        Ok(names)
    }
}

impl WorkingDirectory for UnixFileSystem {
    /// Changes the directory of the whole process. Never restored, so code
    /// running afterwards resolves relative paths against `path`.
    fn change_to(&self, path: &Path) -> Result<()> {
        std::env::set_current_dir(path).map_err(|source| IoError::ChangeDir { path: path.to_path_buf(), source })?;
        Ok(())
    }
}
