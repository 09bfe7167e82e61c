// crates/infra/src/process.rs
use std::{convert::Infallible, ffi::CString, os::unix::ffi::OsStrExt, path::Path};

use filecmdr_ports::process::ProgramLauncher;
use filecmdr_shared_kernel::{IoError, Result};
use log::debug;
use nix::unistd::execv;

/// Replaces the current process image with `execv(2)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecLauncher;

fn c_string(bytes: &[u8]) -> Result<CString> {
    CString::new(bytes)
        .map_err(|_| IoError::NulInArgument { argument: String::from_utf8_lossy(bytes).into_owned() }.into())
}

/// `program` followed by `args`, as C strings.
pub fn build_argv(program: &Path, args: &[String]) -> Result<Vec<CString>> {
    let mut argv = Vec::with_capacity(args.len() + 1);
    argv.push(c_string(program.as_os_str().as_bytes())?);
    for arg in args {
        argv.push(c_string(arg.as_bytes())?);
    }
    Ok(argv)
}

impl ProgramLauncher for ExecLauncher {
    fn exec(&self, program: &Path, args: &[String]) -> Result<Infallible> {
        let argv = build_argv(program, args)?;
        debug!("execv {argv:?}");
        let errno = match execv(&argv[0], &argv) {
            Ok(never) => match never {},
            Err(errno) => errno,
        };
        Err(IoError::Exec { path: program.to_path_buf(), source: errno.into() }.into())
    }
}
