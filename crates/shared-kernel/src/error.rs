// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum FileCmdrError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<FileCmdrError>,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

pub type Result<T> = std::result::Result<T, FileCmdrError>;

/// Command line usage errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing <pathname> argument")]
    MissingPath,

    #[error("empty path")]
    EmptyPath,
}

/// Failures fetching file metadata or resolving its owner.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("cannot stat '{path}': {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no user name for uid {uid}")]
    UnknownOwner { uid: u32 },

    #[error("owner lookup for uid {uid} failed: {source}")]
    OwnerLookup {
        uid: u32,
        #[source]
        source: std::io::Error,
    },
}

/// Value-level errors raised by the renderers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("file mode {mode:#o} is outside {min:#o}..={max:#o}")]
    ModeOutOfRange { mode: u32, min: u32, max: u32 },

    #[error("file mode {mode:#o} has no type character")]
    UnclassifiableMode { mode: u32 },

    #[error("time {seconds} cannot be converted to a local calendar date")]
    TimeOutOfRange { seconds: i64 },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Failures of the actions: directory scan, file copy, user input, exec.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("cannot read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot change directory to '{path}': {source}")]
    ChangeDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input: {source}")]
    Input {
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected end of input")]
    EndOfInput,

    #[error("argument '{argument}' contains a NUL byte")]
    NulInArgument { argument: String },

    #[error("cannot execute '{path}': {source}")]
    Exec {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<FileCmdrError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| FileCmdrError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| FileCmdrError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
