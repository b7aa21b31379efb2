//! Error types for the omni-log crate.

use camino::Utf8PathBuf;

/// Errors that can occur while installing the logger.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The log file could not be opened for appending.
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        /// The requested log file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Another global subscriber was installed outside of this crate.
    #[error("failed to install global subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}
