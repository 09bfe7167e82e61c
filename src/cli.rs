// src/cli.rs
use std::ffi::OsString;

use clap::{Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "filecmdr",
    version = crate::VERSION,
    about = "Print information about a file, then offer to list, print or execute it"
)]
pub struct Args {
    /// File or directory to inspect
    ///
    /// Taken verbatim: empty values and names starting with `-` reach the
    /// inspector unchanged.
    #[arg(
        value_name = "pathname",
        value_hint = ValueHint::AnyPath,
        value_parser = clap::value_parser!(OsString),
        allow_hyphen_values = true
    )]
    pub path: Option<OsString>,
}
