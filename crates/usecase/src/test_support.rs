// crates/usecase/src/test_support.rs
//! In-memory port implementations for use case tests.

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    convert::Infallible,
    io::{self, BufRead, Cursor},
    path::{Path, PathBuf},
};

use filecmdr_ports::{
    filesystem::{DirectoryScanner, FileSource, MetadataSource, WorkingDirectory},
    identity::OwnerDirectory,
    process::ProgramLauncher,
    terminal::UserInput,
};
use filecmdr_shared_kernel::{FileMode, FileSize, IoError, MetadataError, MetadataSnapshot, Result};

pub fn snapshot(mode: u32, uid: u32, gid: u32, size: u64, mtime: i64) -> MetadataSnapshot {
    MetadataSnapshot { mode: FileMode::new(mode), uid, gid, size: FileSize::new(size), mtime }
}

fn not_found() -> io::Error {
    io::Error::from(io::ErrorKind::NotFound)
}

#[derive(Default)]
pub struct StubFs {
    meta: HashMap<PathBuf, MetadataSnapshot>,
    dirs: HashMap<PathBuf, Vec<PathBuf>>,
    files: HashMap<PathBuf, Vec<u8>>,
    pub chdirs: RefCell<Vec<PathBuf>>,
    pub stats: RefCell<Vec<PathBuf>>,
}

impl StubFs {
    pub fn with_meta(mut self, path: &str, snapshot: MetadataSnapshot) -> Self {
        self.meta.insert(path.into(), snapshot);
        self
    }

    pub fn with_dir(mut self, path: &str, entries: &[&str]) -> Self {
        self.dirs.insert(path.into(), entries.iter().map(PathBuf::from).collect());
        self
    }

    pub fn with_file(mut self, path: &str, contents: &[u8]) -> Self {
        self.files.insert(path.into(), contents.to_vec());
        self
    }
}

impl MetadataSource for StubFs {
    fn stat(&self, path: &Path) -> Result<MetadataSnapshot> {
        self.stats.borrow_mut().push(path.to_path_buf());
        self.meta
            .get(path)
            .copied()
            .ok_or_else(|| MetadataError::Stat { path: path.to_path_buf(), source: not_found() }.into())
    }
}

impl DirectoryScanner for StubFs {
    fn entries(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| IoError::ReadDir { path: path.to_path_buf(), source: not_found() }.into())
    }
}

impl FileSource for StubFs {
    fn open(&self, path: &Path) -> Result<Box<dyn BufRead>> {
        let contents = self
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| IoError::FileRead { path: path.to_path_buf(), source: not_found() })?;
        Ok(Box::new(Cursor::new(contents)))
    }
}

impl WorkingDirectory for StubFs {
    fn change_to(&self, path: &Path) -> Result<()> {
        self.chdirs.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

pub struct StubOwners(HashMap<u32, String>);

impl StubOwners {
    pub fn with(names: &[(u32, &str)]) -> Self {
        Self(names.iter().map(|&(uid, name)| (uid, name.to_string())).collect())
    }
}

impl OwnerDirectory for StubOwners {
    fn user_name(&self, uid: u32) -> Result<String> {
        self.0.get(&uid).cloned().ok_or_else(|| MetadataError::UnknownOwner { uid }.into())
    }
}

/// Records the requested program instead of replacing the process.
#[derive(Default)]
pub struct RecordingLauncher {
    pub launched: RefCell<Option<(PathBuf, Vec<String>)>>,
}

impl ProgramLauncher for RecordingLauncher {
    fn exec(&self, program: &Path, args: &[String]) -> Result<Infallible> {
        *self.launched.borrow_mut() = Some((program.to_path_buf(), args.to_vec()));
        Err(IoError::Exec { path: program.to_path_buf(), source: io::Error::other("recorded only") }.into())
    }
}

#[derive(Default)]
pub struct ScriptedInput {
    answers: VecDeque<char>,
    lines: VecDeque<String>,
    pub answers_read: usize,
}

impl ScriptedInput {
    pub fn answering(answer: char) -> Self {
        Self { answers: VecDeque::from([answer]), ..Self::default() }
    }

    pub fn then_line(mut self, line: &str) -> Self {
        self.lines.push_back(line.to_string());
        self
    }
}

impl UserInput for ScriptedInput {
    fn read_answer(&mut self) -> Result<Option<char>> {
        self.answers_read += 1;
        Ok(self.answers.pop_front())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
