//! Error types for the omni-lister crate.
//!
//! This module provides the [`ListError`] type for failures that abort a
//! directory listing.

use camino::Utf8PathBuf;

/// Coarse classification of a [`ListError`].
///
/// Lets callers treat expected conditions ("the directory may not exist")
/// as ordinary control flow without matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListErrorKind {
    /// The directory does not exist.
    NotFound,
    /// The path or pattern supplied by the caller is unusable.
    InvalidArgument,
    /// The directory cannot be opened due to access restrictions.
    PermissionDenied,
    /// Any other I/O failure.
    Other,
}

/// Errors that can occur while listing a directory.
///
/// # Error Recovery Strategy
///
/// - **Surfaced errors** (every variant): the listing is aborted and no
///   partial result is returned. Each is logged at error level first.
/// - **Per-entry metadata failures**: never surfaced. The entry is skipped
///   and the scan continues.
///
/// # Examples
///
/// ```
/// use omni_lister::{ListError, ListErrorKind};
/// use camino::Utf8PathBuf;
///
/// let err = ListError::NotFound(Utf8PathBuf::from("/no/such/dir"));
/// assert_eq!(err.kind(), ListErrorKind::NotFound);
/// assert!(err.to_string().contains("/no/such/dir"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// The resolved directory path does not exist.
    #[error("directory does not exist: {0}")]
    NotFound(Utf8PathBuf),

    /// The resolved path exists but is not a directory.
    #[error("'{0}' is not a directory")]
    NotADirectory(Utf8PathBuf),

    /// The directory could not be opened for enumeration.
    #[error("permission denied reading directory {path}: {source}")]
    PermissionDenied {
        /// The directory that could not be opened.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The glob pattern could not be compiled.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A path is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", _0.display())]
    NonUtf8Path(std::path::PathBuf),

    /// Any other I/O failure while resolving or opening the directory.
    #[error("failed to read directory {path}: {source}")]
    Io {
        /// The directory being resolved or opened.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ListError {
    /// Creates a new [`ListError::InvalidPattern`] error.
    #[inline]
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Classifies an I/O error raised for `path`.
    ///
    /// `NotFound` and `PermissionDenied` get their own variants; anything
    /// else becomes [`ListError::Io`].
    pub fn from_io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// Returns the coarse kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ListErrorKind {
        match self {
            Self::NotFound(_) => ListErrorKind::NotFound,
            Self::NotADirectory(_) | Self::InvalidPattern { .. } | Self::NonUtf8Path(_) => {
                ListErrorKind::InvalidArgument
            }
            Self::PermissionDenied { .. } => ListErrorKind::PermissionDenied,
            Self::Io { .. } => ListErrorKind::Other,
        }
    }

    /// Returns the directory path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::NotFound(path)
            | Self::NotADirectory(path)
            | Self::PermissionDenied { path, .. }
            | Self::Io { path, .. } => Some(path),
            Self::InvalidPattern { .. } | Self::NonUtf8Path(_) => None,
        }
    }
}
