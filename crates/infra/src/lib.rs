// crates/infra/src/lib.rs
//! Unix implementations of the ports.
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod identity;
pub mod persistence;
pub mod process;
pub mod terminal;

pub use filesystem::UnixFileSystem;
pub use identity::{PasswdOwnerDirectory, current_credentials};
pub use persistence::FileReader;
pub use process::ExecLauncher;
pub use terminal::BufferedInput;
