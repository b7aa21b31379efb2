//! Core types, errors, and configuration for the omni-fs workspace.
//!
//! This crate provides the foundational types shared by the lister, the
//! logging setup, and the CLI:
//!
//! - [`ConfigError`] for configuration loading failures
//! - Configuration structures ([`Config`], [`ListConfig`], [`LogConfig`])
//! - Domain types ([`DirectoryPath`], [`FileEntry`], [`ScanResult`], [`ListOutput`])

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, ListConfig, LogConfig, LogLevel};
pub use error::ConfigError;
pub use types::{DirectoryPath, FileEntry, ListOutput, ScanResult};
