//! Directory listing with glob filtering and hidden-file exclusion.
//!
//! This crate lists the regular files directly inside one directory. It does
//! not recurse and it never follows symbolic links.
//!
//! # Overview
//!
//! - [`list_files`]: one-call interface returning names or full paths
//! - [`DirectoryLister`]: builder form returning a full [`ScanResult`]
//! - [`NamePattern`]: glob matching against bare file names
//! - [`ListError`]: everything that can abort a listing
//!
//! # Example
//!
//! Given a directory holding `B.txt`, `a.txt`, `.hidden` and a subdirectory
//! `sub/`:
//!
//! ```no_run
//! use omni_lister::list_files;
//! use omni_core::ListOutput;
//! use camino::Utf8Path;
//!
//! let dir = Utf8Path::new("/data");
//!
//! let names = list_files(Some(dir), None, false, false)?;
//! assert_eq!(names, ListOutput::Names(vec!["a.txt".into(), "B.txt".into()]));
//!
//! let all = list_files(Some(dir), None, true, false)?;
//! assert_eq!(all.len(), 3);
//!
//! let txt = list_files(Some(dir), Some("*.txt"), false, false)?;
//! assert_eq!(txt.len(), 2);
//! # Ok::<(), omni_lister::ListError>(())
//! ```
//!
//! # Logging
//!
//! Successful scans emit one `info` event with the directory, pattern and
//! file count. Every surfaced error is preceded by an `error` event.
//! Install a subscriber (see `omni-log`) to see them.

#![deny(clippy::all)]
#![warn(missing_docs)]

mod error;
mod lister;
mod pattern;

pub use error::{ListError, ListErrorKind};
pub use lister::DirectoryLister;
pub use omni_core::{ListOutput, ScanResult};
pub use pattern::NamePattern;

use camino::Utf8Path;

/// Lists the regular files in a directory.
///
/// # Arguments
///
/// * `path` - Directory to list; the current working directory when `None`
/// * `pattern` - Glob matched against file names; `None` or `""` keeps all
/// * `show_hidden` - Keep names starting with `.`
/// * `return_paths` - Return full resolved paths instead of bare names
///
/// # Errors
///
/// See [`DirectoryLister::scan`].
pub fn list_files(
    path: Option<&Utf8Path>,
    pattern: Option<&str>,
    show_hidden: bool,
    return_paths: bool,
) -> Result<ListOutput, ListError> {
    let mut lister = DirectoryLister::new(path).with_show_hidden(show_hidden);
    if let Some(pattern) = pattern {
        lister = lister.with_pattern(pattern);
    }

    Ok(lister.scan()?.into_output(return_paths))
}
