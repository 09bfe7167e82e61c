// crates/infra/src/identity.rs
use filecmdr_ports::identity::OwnerDirectory;
use filecmdr_shared_kernel::{Credentials, MetadataError, Result};
use nix::unistd::{Uid, User, getgid, getuid};

/// Real user and group id of this process.
pub fn current_credentials() -> Credentials {
    Credentials::new(getuid().as_raw(), getgid().as_raw())
}

/// Resolves user names through the password database.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswdOwnerDirectory;

impl OwnerDirectory for PasswdOwnerDirectory {
    fn user_name(&self, uid: u32) -> Result<String> {
        match User::from_uid(Uid::from_raw(uid)) {
            Ok(Some(user)) => Ok(user.name),
            Ok(None) => Err(MetadataError::UnknownOwner { uid }.into()),
            Err(errno) => Err(MetadataError::OwnerLookup { uid, source: errno.into() }.into()),
        }
    }
}
