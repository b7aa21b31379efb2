//! Non-recursive listing of the regular files in one directory.
//!
//! This module provides [`DirectoryLister`], which resolves a directory,
//! validates it, and collects the regular files directly inside it.
//!
//! # Filtering
//!
//! An entry is kept only if all of the following hold:
//!
//! - it is a regular file, judged without following symbolic links
//!   (symlinks, directories, sockets and devices are skipped)
//! - its type could be read (entries whose metadata is unavailable are skipped)
//! - its name is valid UTF-8
//! - it is not hidden, unless hidden files were requested
//! - its name matches the glob pattern, when one was given
//!
//! Survivors are sorted case-insensitively by name.

use std::fs::{self, DirEntry};
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use omni_core::types::entry::is_hidden_name;
use omni_core::{DirectoryPath, FileEntry, ListConfig, ScanResult};
use tracing::{debug, error, info};

use crate::error::ListError;
use crate::pattern::NamePattern;

/// Lists the regular files in a single directory.
///
/// # Examples
///
/// ```no_run
/// use omni_lister::DirectoryLister;
/// use camino::Utf8Path;
///
/// let result = DirectoryLister::new(Some(Utf8Path::new("/var/log")))
///     .with_pattern("*.log")
///     .scan()?;
///
/// for name in result.names() {
///     println!("{name}");
/// }
/// # Ok::<(), omni_lister::ListError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectoryLister {
    /// Requested directory. `None` means the current working directory.
    path: Option<Utf8PathBuf>,
    /// Glob pattern applied to file names. Empty means no filtering.
    pattern: Option<String>,
    /// Whether names starting with `.` are kept.
    show_hidden: bool,
}

impl DirectoryLister {
    /// Creates a lister for `path`, or for the current directory when `None`.
    #[must_use]
    pub fn new(path: Option<&Utf8Path>) -> Self {
        Self {
            path: path.map(Utf8Path::to_owned),
            pattern: None,
            show_hidden: false,
        }
    }

    /// Creates a lister from the listing section of a configuration.
    #[must_use]
    pub fn from_config(config: &ListConfig) -> Self {
        Self {
            path: config.path.clone(),
            pattern: config.pattern.clone(),
            show_hidden: config.show_hidden,
        }
    }

    /// Restricts the listing to names matching a glob pattern.
    ///
    /// An empty pattern disables filtering.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Configures whether hidden files (names starting with `.`) are kept.
    #[must_use]
    pub const fn with_show_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    /// Scans the directory and returns its regular files, sorted by name.
    ///
    /// The pattern is compiled before the filesystem is touched. The
    /// directory handle is released before this returns, on success or error.
    ///
    /// # Errors
    ///
    /// - [`ListError::InvalidPattern`] if the pattern does not compile
    /// - [`ListError::NotFound`] if the directory does not exist
    /// - [`ListError::NotADirectory`] if the path is not a directory
    /// - [`ListError::PermissionDenied`] if the directory cannot be opened
    /// - [`ListError::NonUtf8Path`] or [`ListError::Io`] for anything else
    pub fn scan(&self) -> Result<ScanResult, ListError> {
        let pattern = self.compile_pattern()?;
        let directory = self.resolve()?;
        let entries = read_entries(&directory, pattern.as_ref(), self.show_hidden)?;

        let result = ScanResult::new(
            directory,
            pattern.as_ref().map(|p| p.as_str().to_owned()),
            entries,
        );

        info!(
            directory = %result.directory(),
            pattern = result.pattern().unwrap_or("<none>"),
            count = result.len(),
            "Found {} files",
            result.len()
        );

        Ok(result)
    }

    /// Compiles the configured pattern, treating an empty one as absent.
    fn compile_pattern(&self) -> Result<Option<NamePattern>, ListError> {
        match self.pattern.as_deref() {
            None | Some("") => Ok(None),
            Some(pattern) => NamePattern::new(pattern).map(Some).inspect_err(|err| {
                error!(error = %err, "Rejected file name pattern");
            }),
        }
    }

    /// Resolves the requested path to an absolute, canonical directory.
    fn resolve(&self) -> Result<DirectoryPath, ListError> {
        let absolute = match &self.path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => current_dir()?.join(path),
            None => current_dir()?,
        };

        let resolved = match absolute.canonicalize_utf8() {
            Ok(resolved) => resolved,
            Err(source)
                if matches!(
                    source.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                error!(path = %absolute, "Directory not found");
                return Err(ListError::NotFound(absolute));
            }
            Err(source) => {
                let err = ListError::from_io(absolute, source);
                error!(error = %err, "Failed to resolve directory");
                return Err(err);
            }
        };

        let metadata = fs::metadata(&resolved).map_err(|source| {
            let err = ListError::from_io(resolved.clone(), source);
            error!(error = %err, "Failed to read directory metadata");
            err
        })?;

        if !metadata.is_dir() {
            error!(path = %resolved, "Path is not a directory");
            return Err(ListError::NotADirectory(resolved));
        }

        Ok(DirectoryPath::from_resolved(resolved))
    }
}

/// Returns the process's current directory as a UTF-8 path.
fn current_dir() -> Result<Utf8PathBuf, ListError> {
    let cwd = std::env::current_dir().map_err(|source| {
        error!(error = %source, "Failed to read current directory");
        ListError::Io {
            path: Utf8PathBuf::from("."),
            source,
        }
    })?;

    Utf8PathBuf::from_path_buf(cwd).map_err(|raw| {
        error!(path = %raw.display(), "Current directory is not valid UTF-8");
        ListError::NonUtf8Path(raw)
    })
}

/// Enumerates `directory` and keeps the entries that pass every filter.
///
/// The `ReadDir` handle lives only for the duration of this call.
fn read_entries(
    directory: &DirectoryPath,
    pattern: Option<&NamePattern>,
    show_hidden: bool,
) -> Result<Vec<FileEntry>, ListError> {
    let read_dir =
        fs::read_dir(directory.as_path()).map_err(|source| open_failure(directory, source))?;

    let mut entries = Vec::new();

    for entry in read_dir {
        let Some(name) = regular_file_name(entry) else {
            continue;
        };

        if !show_hidden && is_hidden_name(&name) {
            continue;
        }

        if pattern.is_some_and(|p| !p.is_match(&name)) {
            continue;
        }

        entries.push(directory.entry(name));
    }

    Ok(entries)
}

/// Classifies a failure to open `directory` and logs it with its cause.
fn open_failure(directory: &DirectoryPath, source: io::Error) -> ListError {
    let err = ListError::from_io(directory.as_path(), source);
    error!(path = %directory, error = %err, "Failed to open directory");
    err
}

/// Returns the entry's name if it is a regular file.
///
/// Symbolic links are not followed. Unreadable entries, entries whose type
/// cannot be determined, and non-UTF-8 names all yield `None`.
fn regular_file_name(entry: io::Result<DirEntry>) -> Option<String> {
    let entry = entry
        .inspect_err(|err| debug!(error = %err, "Skipping unreadable directory entry"))
        .ok()?;

    let file_type = entry
        .file_type()
        .inspect_err(|err| {
            let path = entry.path();
            debug!(
                path = %path.display(),
                error = %err,
                "Skipping entry with unavailable metadata"
            );
        })
        .ok()?;

    if !file_type.is_file() {
        return None;
    }

    entry
        .file_name()
        .into_string()
        .inspect_err(|raw| debug!(name = ?raw, "Skipping non-UTF-8 file name"))
        .ok()
}
