// crates/domain/src/info_line.rs
use std::{fmt, path::Path};

use filecmdr_shared_kernel::FileSize;

use crate::{mode::ModeString, time::TimeString};

/// One printed line of file information.
///
/// `frw-r----- root             1408 08/09/2016 20:06 /etc/passwd`
#[derive(Debug, Clone)]
pub struct FileInfoLine<'a> {
    pub mode: ModeString,
    pub owner: &'a str,
    pub size: FileSize,
    pub mtime: TimeString,
    /// Path exactly as the caller passed it.
    pub path: &'a Path,
}

impl fmt::Display for FileInfoLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<8} {:>12} {} {}",
            self.mode,
            self.owner,
            self.size,
            self.mtime,
            self.path.display()
        )
    }
}
