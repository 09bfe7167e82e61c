// crates/usecase/src/inspector.rs
use std::{io::Write, path::Path};

use filecmdr_domain::{FileClassification, FileInfoLine, classify_snapshot, render_mode, render_time};
use filecmdr_ports::{filesystem::MetadataSource, identity::OwnerDirectory};
use filecmdr_shared_kernel::{Credentials, Result, ValidationError};
use log::trace;

use crate::output_error;

/// Prints one information line for a path and classifies it.
pub struct Inspector<'a> {
    metadata: &'a dyn MetadataSource,
    owners: &'a dyn OwnerDirectory,
    credentials: Credentials,
}

impl<'a> Inspector<'a> {
    pub fn new(metadata: &'a dyn MetadataSource, owners: &'a dyn OwnerDirectory, credentials: Credentials) -> Self {
        Self { metadata, owners, credentials }
    }

    /// Writes `<mode> <owner> <size> <mtime> <path>` for `path` to `out`.
    ///
    /// Nothing is written unless every field could be produced.
    pub fn inspect(&self, path: &Path, out: &mut dyn Write) -> Result<FileClassification> {
        if path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyPath.into());
        }

        let snapshot = self.metadata.stat(path)?;
        trace!("stat {}: {snapshot:?}", path.display());
        let owner = self.owners.user_name(snapshot.uid)?;
        let mode = render_mode(snapshot.mode, snapshot.uid, snapshot.gid, self.credentials)?;
        let mtime = render_time(snapshot.mtime)?;

        let line = FileInfoLine { mode, owner: &owner, size: snapshot.size, mtime, path };
        writeln!(out, "{line}").map_err(output_error)?;

        Ok(classify_snapshot(&snapshot, self.credentials))
    }
}
