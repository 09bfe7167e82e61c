// crates/shared-kernel/src/value_objects/credentials.rs

/// Real user and group id of the invoking process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Credentials {
    pub uid: u32,
    pub gid: u32,
}

impl Credentials {
    pub const fn new(uid: u32, gid: u32) -> Self {
        Self { uid, gid }
    }
}
