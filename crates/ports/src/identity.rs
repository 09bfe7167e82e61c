// crates/ports/src/identity.rs
use filecmdr_shared_kernel::Result;

/// Port mapping numeric user ids to account names.
pub trait OwnerDirectory {
    fn user_name(&self, uid: u32) -> Result<String>;
}
