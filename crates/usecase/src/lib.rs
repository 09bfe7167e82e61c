//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement specific use cases:
//!
//! - [`inspector`]: print the information line for one path and classify it
//! - [`dispatcher`]: offer and perform the action matching a classification
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dispatcher;
pub mod inspector;

#[cfg(test)]
mod test_support;

pub use dispatcher::{Action, ActionDispatcher};
pub use inspector::Inspector;

fn output_error(source: std::io::Error) -> filecmdr_shared_kernel::IoError {
    filecmdr_shared_kernel::IoError::Output { source }
}
