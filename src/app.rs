// src/app.rs
use std::io;

use anyhow::{Context, Result};
use filecmdr_infra::{
    BufferedInput, ExecLauncher, FileReader, PasswdOwnerDirectory, UnixFileSystem, current_credentials,
};
use filecmdr_usecase::{ActionDispatcher, Inspector};
use log::debug;

use crate::config::Config;

/// Inspects the target, then offers the matching action.
///
/// Listing a directory leaves the process inside it.
pub fn run(config: &Config) -> Result<()> {
    let fs = UnixFileSystem::new();
    let owners = PasswdOwnerDirectory;
    let files = FileReader;
    let launcher = ExecLauncher;
    let credentials = current_credentials();
    debug!("running as uid={} gid={}", credentials.uid, credentials.gid);

    let inspector = Inspector::new(&fs, &owners, credentials);
    let dispatcher = ActionDispatcher::new(&inspector, &fs, &fs, &files, &launcher);

    let mut out = io::stdout().lock();
    let classification = inspector.inspect(&config.target, &mut out).context("inspection failed")?;
    debug!("'{}' classified as {classification}", config.target.display());

    let mut input = BufferedInput::stdin();
    dispatcher
        .dispatch(classification, &config.target, &mut input, &mut out)
        .context("action failed")?;
    Ok(())
}
