//! # Domain
//!
//! Pure rendering and classification rules:
//!
//! - [`classification`]: file type category, shared by rendering and dispatch
//! - [`mode`]: `drwxr-xr-x` style type+permission strings
//! - [`time`]: `DD/MM/YYYY HH:MM` timestamps
//! - [`info_line`]: the printed information line

#![allow(clippy::multiple_crate_versions)]

pub mod classification;
pub mod info_line;
pub mod mode;
pub mod time;

pub use classification::{FileClassification, classify, classify_snapshot, is_user_executable};
pub use info_line::FileInfoLine;
pub use mode::{ModeString, render_mode};
pub use time::{TimeString, render_time, render_time_in};
