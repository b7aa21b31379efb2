//! Configuration structures for omni-fs.
//!
//! This module provides configuration types for the components of the workspace:
//!
//! - [`ListConfig`] - Directory listing settings (path, pattern, hidden files)
//! - [`LogConfig`] - Logger settings (level, console, log file)
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`], and every field may be
//! omitted from a configuration file.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Minimum severity of log events that are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Very verbose diagnostics.
    Trace,
    /// Debugging output.
    Debug,
    /// Informational messages (the default).
    #[default]
    Info,
    /// Warnings.
    Warn,
    /// Errors only.
    Error,
}

impl LogLevel {
    /// Returns the lowercase directive name used by log filters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for a directory listing.
///
/// # Examples
///
/// ```
/// use omni_core::ListConfig;
///
/// let config = ListConfig::default();
/// assert!(config.path.is_none());
/// assert!(!config.show_hidden);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Directory to list. `None` means the current working directory.
    pub path: Option<Utf8PathBuf>,

    /// Glob pattern matched against file names (e.g. `*.log`).
    pub pattern: Option<String>,

    /// Whether to include files whose name starts with `.`.
    pub show_hidden: bool,

    /// Whether to return full resolved paths instead of bare names.
    pub return_paths: bool,
}

/// Configuration for the process-wide logger.
///
/// # Examples
///
/// ```
/// use omni_core::{LogConfig, LogLevel};
///
/// let config = LogConfig::default();
/// assert_eq!(config.level, LogLevel::Info);
/// assert!(config.use_console);
/// assert!(config.log_file.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level to emit. `RUST_LOG` takes precedence when set.
    pub level: LogLevel,

    /// Optional file that log lines are appended to.
    pub log_file: Option<Utf8PathBuf>,

    /// Whether to write to stdout (below WARN) and stderr (WARN and above).
    pub use_console: bool,

    /// Send every console event to stderr, keeping stdout free for program
    /// output.
    pub console_stderr: bool,

    /// Whether console output may use ANSI colors.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            log_file: None,
            use_console: true,
            console_stderr: false,
            ansi: true,
        }
    }
}

/// Root configuration for omni-fs.
///
/// # Examples
///
/// ```
/// use omni_core::Config;
///
/// let config: Config = serde_json::from_str(r#"{"listing": {"show_hidden": true}}"#).unwrap();
/// assert!(config.listing.show_hidden);
/// assert!(config.logging.use_console);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Listing configuration.
    pub listing: ListConfig,

    /// Logger configuration.
    pub logging: LogConfig,
}

impl Config {
    /// Loads and validates a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if the file does not exist,
    /// [`ConfigError::Io`] if it cannot be read, [`ConfigError::Parse`] if it
    /// is not valid JSON, and [`ConfigError::InvalidOption`] if a value fails
    /// validation.
    pub fn from_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_owned()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks option values that deserialization alone cannot enforce.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] for the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(pattern) = &self.listing.pattern {
            if pattern.contains('/') {
                return Err(ConfigError::invalid_option(
                    "listing.pattern",
                    "patterns match file names only and must not contain '/'",
                ));
            }
        }

        if self
            .logging
            .log_file
            .as_ref()
            .is_some_and(|p| p.as_str().is_empty())
        {
            return Err(ConfigError::invalid_option(
                "logging.log_file",
                "must not be empty",
            ));
        }

        Ok(())
    }
}
