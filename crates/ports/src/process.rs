// crates/ports/src/process.rs
use std::{convert::Infallible, path::Path};

use filecmdr_shared_kernel::Result;

/// Port replacing the running process with another program.
pub trait ProgramLauncher {
    /// Runs `program` with `program` as argument zero followed by `args`.
    ///
    /// Only returns when the replacement failed.
    fn exec(&self, program: &Path, args: &[String]) -> Result<Infallible>;
}
