// crates/usecase/src/dispatcher.rs
use std::{io::Write, path::Path};

use filecmdr_domain::FileClassification;
use filecmdr_ports::{
    filesystem::{DirectoryScanner, FileSource, WorkingDirectory},
    process::ProgramLauncher,
    terminal::UserInput,
};
use filecmdr_shared_kernel::{ErrorContext, IoError, Result};
use log::debug;

use crate::{inspector::Inspector, output_error};

/// Action offered to the user for a classified path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ListDirectory,
    Execute,
    ListFile,
}

impl Action {
    /// `None` for links, special files and unclassified paths.
    pub const fn for_classification(classification: FileClassification) -> Option<Self> {
        match classification {
            FileClassification::Directory => Some(Self::ListDirectory),
            FileClassification::UserExecutableRegularFile => Some(Self::Execute),
            FileClassification::RegularFile => Some(Self::ListFile),
            FileClassification::SymbolicLink | FileClassification::Other | FileClassification::Error => None,
        }
    }

    pub fn prompt(self, path: &Path) -> String {
        match self {
            Self::ListDirectory => format!("Do you want to list the directory {} (y/n): ", path.display()),
            Self::Execute => format!("Do you want to execute {} (y/n): ", path.display()),
            Self::ListFile => format!("Do you want to list the file {} (y/n): ", path.display()),
        }
    }
}

fn is_affirmative(answer: Option<char>) -> bool {
    matches!(answer, Some('y' | 'Y'))
}

/// Prompts for and performs the action matching a classification.
pub struct ActionDispatcher<'a> {
    inspector: &'a Inspector<'a>,
    directories: &'a dyn DirectoryScanner,
    workdir: &'a dyn WorkingDirectory,
    files: &'a dyn FileSource,
    launcher: &'a dyn ProgramLauncher,
}

impl<'a> ActionDispatcher<'a> {
    pub fn new(
        inspector: &'a Inspector<'a>,
        directories: &'a dyn DirectoryScanner,
        workdir: &'a dyn WorkingDirectory,
        files: &'a dyn FileSource,
        launcher: &'a dyn ProgramLauncher,
    ) -> Self {
        Self { inspector, directories, workdir, files, launcher }
    }

    /// Asks whether to act on `path` and does so on `y`/`Y`.
    ///
    /// Declining, end of input, and classifications without an action all
    /// succeed without side effects. A successful execution never returns.
    pub fn dispatch(
        &self,
        classification: FileClassification,
        path: &Path,
        input: &mut dyn UserInput,
        out: &mut dyn Write,
    ) -> Result<()> {
        let Some(action) = Action::for_classification(classification) else {
            debug!("no action for {classification} '{}'", path.display());
            return Ok(());
        };

        write!(out, "{}", action.prompt(path)).map_err(output_error)?;
        out.flush().map_err(output_error)?;

        let answer = input.read_answer()?;
        if !is_affirmative(answer) {
            debug!("{action:?} declined with {answer:?}");
            return Ok(());
        }

        match action {
            Action::ListDirectory => self.list_directory(path, out),
            Action::Execute => self.execute(path, input, out),
            Action::ListFile => self.list_file(path, out),
        }
    }

    /// Prints an information line for each entry of `path`, one level deep.
    ///
    /// Changes the process working directory to `path` first so the entry
    /// names resolve; the change outlives this call.
    pub fn list_directory(&self, path: &Path, out: &mut dyn Write) -> Result<()> {
        let entries = self.directories.entries(path)?;
        self.workdir.change_to(path)?;
        debug!("listing {} entries of '{}'", entries.len(), path.display());

        for entry in &entries {
            self.inspector
                .inspect(entry, out)
                .with_context(|| format!("entry '{}' of '{}'", entry.display(), path.display()))?;
        }
        Ok(())
    }

    /// Copies the file to `out` line by line, then writes one extra newline.
    pub fn list_file(&self, path: &Path, out: &mut dyn Write) -> Result<()> {
        let mut reader = self.files.open(path)?;
        let mut line = Vec::new();
        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .map_err(|source| IoError::FileRead { path: path.to_path_buf(), source })?;
            if read == 0 {
                break;
            }
            out.write_all(&line).map_err(output_error)?;
        }
        out.write_all(b"\n").map_err(output_error)?;
        out.flush().map_err(output_error)?;
        Ok(())
    }

    /// Reads an argument line and replaces the process with `path`.
    ///
    /// Returns only on failure.
    pub fn execute(&self, path: &Path, input: &mut dyn UserInput, out: &mut dyn Write) -> Result<()> {
        write!(out, "Enter any arguments to {}: ", path.display()).map_err(output_error)?;
        out.flush().map_err(output_error)?;

        let line = input.read_line()?.ok_or(IoError::EndOfInput)?;
        let args: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
        debug!("exec '{}' with {args:?}", path.display());

        match self.launcher.exec(path, &args)? {}
    }
}
