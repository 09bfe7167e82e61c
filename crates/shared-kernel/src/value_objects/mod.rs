// crates/shared-kernel/src/value_objects/mod.rs
pub mod credentials;
pub mod file_meta;
pub mod file_mode;
pub mod file_size;

pub use credentials::Credentials;
pub use file_meta::MetadataSnapshot;
pub use file_mode::FileMode;
pub use file_size::FileSize;
