//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: stat, directory scans, file contents, working directory
//! - [`identity`]: uid to user name lookup
//! - [`process`]: replacing the process image
//! - [`terminal`]: reading the user's answers
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod identity;
pub mod process;
pub mod terminal;
