// crates/domain/src/mode.rs
use std::fmt;

use filecmdr_shared_kernel::{
    Credentials, DomainError, DomainResult, FileMode,
    value_objects::file_mode::{S_IRGRP, S_IROTH, S_IRUSR, S_IWGRP, S_IWOTH, S_IWUSR, S_IXGRP, S_IXOTH, S_IXUSR},
};

use crate::classification::classify;

/// Permission bits in rendering order: user, group, other; each as r, w, x.
const PERMISSION_BITS: [(u32, u8); 9] = [
    (S_IRUSR, b'r'),
    (S_IWUSR, b'w'),
    (S_IXUSR, b'x'),
    (S_IRGRP, b'r'),
    (S_IWGRP, b'w'),
    (S_IXGRP, b'x'),
    (S_IROTH, b'r'),
    (S_IWOTH, b'w'),
    (S_IXOTH, b'x'),
];

/// Ten character type+permission string such as `drwxr-xr-x`.
///
/// The type character is one of `d`, `e`, `f`, `l`, `o`. Set-uid, set-gid and
/// sticky bits are not represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModeString([u8; ModeString::LEN]);

impl ModeString {
    pub const LEN: usize = 10;

    pub fn as_str(&self) -> &str {
        // only ASCII is ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    pub const fn type_char(&self) -> char {
        self.0[0] as char
    }
}

impl fmt::Display for ModeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Renders `mode` the way the info line shows it.
///
/// The type character comes from [`classify`], so `e` means the invoking user
/// can execute the file.
pub fn render_mode(mode: FileMode, owner_uid: u32, owner_gid: u32, invoking: Credentials) -> DomainResult<ModeString> {
    if !mode.is_in_range() {
        return Err(DomainError::ModeOutOfRange { mode: mode.bits(), min: FileMode::MIN, max: FileMode::MAX });
    }

    let type_char = classify(mode, owner_uid, owner_gid, invoking)
        .type_char()
        .ok_or(DomainError::UnclassifiableMode { mode: mode.bits() })?;

    let mut buf = [b'-'; ModeString::LEN];
    buf[0] = type_char as u8;
    for (slot, (bit, ch)) in buf[1..].iter_mut().zip(PERMISSION_BITS) {
        if mode.has(bit) {
            *slot = ch;
        }
    }
    Ok(ModeString(buf))
}
