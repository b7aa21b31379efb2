//! Domain types for directory listings.
//!
//! # Module Organization
//!
//! - [`entry`] - Resolved directories and the files found in them
//! - [`listing`] - Sorted scan results and caller-facing output
//!
//! All public types are also re-exported at the crate root:
//!
//! ```
//! use omni_core::{DirectoryPath, FileEntry, ListOutput, ScanResult};
//! ```

pub mod entry;
pub mod listing;

pub use entry::{DirectoryPath, FileEntry};
pub use listing::{ListOutput, ScanResult};
