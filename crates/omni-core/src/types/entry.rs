//! Resolved directories and the regular files discovered in them.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

/// An absolute, resolved path to a directory that is about to be scanned.
///
/// A `DirectoryPath` is produced by the lister after it has canonicalized the
/// requested location and confirmed that it is a directory. The check is made
/// at scan time and is not cached: the directory may disappear afterwards.
///
/// # Examples
///
/// ```
/// use omni_core::DirectoryPath;
/// use camino::Utf8PathBuf;
///
/// let dir = DirectoryPath::from_resolved(Utf8PathBuf::from("/var/log"));
/// assert_eq!(dir.as_path(), "/var/log");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DirectoryPath(Utf8PathBuf);

impl DirectoryPath {
    /// Wraps a path that the caller has already resolved and validated.
    #[inline]
    #[must_use]
    pub const fn from_resolved(path: Utf8PathBuf) -> Self {
        Self(path)
    }

    /// Returns the resolved directory path.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Utf8Path {
        &self.0
    }

    /// Builds the [`FileEntry`] for a file named `name` in this directory.
    #[must_use]
    pub fn entry(&self, name: impl Into<String>) -> FileEntry {
        let name = name.into();
        let path = self.0.join(&name);
        FileEntry { name, path }
    }

    /// Consumes the wrapper and returns the inner path.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Utf8PathBuf {
        self.0
    }
}

impl AsRef<Utf8Path> for DirectoryPath {
    fn as_ref(&self) -> &Utf8Path {
        &self.0
    }
}

impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A regular file found directly inside a scanned directory.
///
/// Constructed fresh on every scan and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileEntry {
    /// The bare file name, e.g. `app.log`.
    pub name: String,

    /// The full path: the resolved directory joined with `name`.
    pub path: Utf8PathBuf,
}

impl FileEntry {
    /// Returns `true` if the file name starts with `.`.
    #[inline]
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        is_hidden_name(&self.name)
    }
}

/// Returns `true` if `name` is a hidden file name (starts with `.`).
#[inline]
#[must_use]
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}
