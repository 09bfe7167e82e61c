// crates/shared-kernel/src/value_objects/file_mode.rs
/// Mask selecting the file type bits.
pub const S_IFMT: u32 = 0o170_000;
pub const S_IFSOCK: u32 = 0o140_000;
pub const S_IFLNK: u32 = 0o120_000;
pub const S_IFREG: u32 = 0o100_000;
pub const S_IFBLK: u32 = 0o060_000;
pub const S_IFDIR: u32 = 0o040_000;
pub const S_IFCHR: u32 = 0o020_000;
pub const S_IFIFO: u32 = 0o010_000;

pub const S_IRUSR: u32 = 0o400;
pub const S_IWUSR: u32 = 0o200;
pub const S_IXUSR: u32 = 0o100;
pub const S_IRGRP: u32 = 0o040;
pub const S_IWGRP: u32 = 0o020;
pub const S_IXGRP: u32 = 0o010;
pub const S_IROTH: u32 = 0o004;
pub const S_IWOTH: u32 = 0o002;
pub const S_IXOTH: u32 = 0o001;

/// Raw `st_mode` value: file type bits plus permission bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FileMode(u32);

impl FileMode {
    /// Smallest value accepted as a file mode (a FIFO with no permissions).
    pub const MIN: u32 = 0o010_000;
    /// Largest value accepted as a file mode.
    pub const MAX: u32 = 0o167_777;

    #[inline]
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn type_bits(self) -> u32 {
        self.0 & S_IFMT
    }

    #[inline]
    pub const fn is_in_range(self) -> bool {
        self.0 >= Self::MIN && self.0 <= Self::MAX
    }

    #[inline]
    pub const fn has(self, bit: u32) -> bool {
        self.0 & bit != 0
    }

    pub const fn is_dir(self) -> bool {
        self.type_bits() == S_IFDIR
    }

    pub const fn is_symlink(self) -> bool {
        self.type_bits() == S_IFLNK
    }

    pub const fn is_regular(self) -> bool {
        self.type_bits() == S_IFREG
    }

    /// FIFO, character device or block device.
    pub const fn is_special(self) -> bool {
        matches!(self.type_bits(), S_IFIFO | S_IFCHR | S_IFBLK)
    }
}
