//! Scan results and the output handed back to callers.

use camino::Utf8PathBuf;
use serde::Serialize;

use super::entry::{DirectoryPath, FileEntry};

/// The files found by one scan, sorted case-insensitively by name.
///
/// The ordering is established by [`ScanResult::new`] and cannot be broken
/// afterwards: entries are only exposed by shared reference or consumed.
///
/// # Examples
///
/// ```
/// use omni_core::{DirectoryPath, ScanResult};
/// use camino::Utf8PathBuf;
///
/// let dir = DirectoryPath::from_resolved(Utf8PathBuf::from("/data"));
/// let entries = vec![dir.entry("B.txt"), dir.entry("a.txt")];
/// let result = ScanResult::new(dir, None, entries);
///
/// assert_eq!(result.names().collect::<Vec<_>>(), ["a.txt", "B.txt"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    directory: DirectoryPath,
    pattern: Option<String>,
    entries: Vec<FileEntry>,
}

impl ScanResult {
    /// Creates a result, sorting `entries` by lowercase name.
    ///
    /// Names that compare equal ignoring case are ordered by their exact
    /// bytes so the output is deterministic.
    #[must_use]
    pub fn new(
        directory: DirectoryPath,
        pattern: Option<String>,
        mut entries: Vec<FileEntry>,
    ) -> Self {
        entries.sort_by_cached_key(|entry| (entry.name.to_lowercase(), entry.name.clone()));
        Self {
            directory,
            pattern,
            entries,
        }
    }

    /// Returns the resolved directory that was scanned.
    #[inline]
    #[must_use]
    pub const fn directory(&self) -> &DirectoryPath {
        &self.directory
    }

    /// Returns the glob pattern that was applied, if any.
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Returns the sorted entries.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Returns the number of files found.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no files were found.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the file names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Iterates over the full paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &camino::Utf8Path> {
        self.entries.iter().map(|entry| entry.path.as_path())
    }

    /// Converts into names or full paths, preserving order.
    #[must_use]
    pub fn into_output(self, return_paths: bool) -> ListOutput {
        if return_paths {
            ListOutput::Paths(self.entries.into_iter().map(|entry| entry.path).collect())
        } else {
            ListOutput::Names(self.entries.into_iter().map(|entry| entry.name).collect())
        }
    }
}

impl IntoIterator for ScanResult {
    type Item = FileEntry;
    type IntoIter = std::vec::IntoIter<FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// The value returned by `list_files`: bare names or full paths.
///
/// Serializes as a plain JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ListOutput {
    /// Bare file names.
    Names(Vec<String>),
    /// Full resolved paths.
    Paths(Vec<Utf8PathBuf>),
}

impl ListOutput {
    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Names(names) => names.len(),
            Self::Paths(paths) => paths.len(),
        }
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the items as string slices.
    pub fn iter_str(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Self::Names(names) => Box::new(names.iter().map(String::as_str)),
            Self::Paths(paths) => Box::new(paths.iter().map(|p| p.as_str())),
        }
    }
}
