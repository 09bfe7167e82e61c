// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, DomainResult, ErrorContext, FileCmdrError, IoError, MetadataError, Result,
    ValidationError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Credentials, FileMode, FileSize, MetadataSnapshot};
