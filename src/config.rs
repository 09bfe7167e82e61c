// src/config.rs
use std::path::PathBuf;

use filecmdr_shared_kernel::ValidationError;

use crate::cli::Args;

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path exactly as typed; printed back verbatim.
    pub target: PathBuf,
}

impl TryFrom<Args> for Config {
    type Error = ValidationError;

    /// Only a missing argument is a usage error; an empty path is left for
    /// the inspector to reject.
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let target = args.path.map(PathBuf::from).ok_or(ValidationError::MissingPath)?;
        Ok(Self { target })
    }
}
