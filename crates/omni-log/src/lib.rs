//! Process-wide logger setup for omni-fs.
//!
//! Call [`init_logging`] once, early in `main`. Library code only emits
//! `tracing` events and never configures output itself.
//!
//! # Output
//!
//! Every line has the shape
//!
//! ```text
//! 2024-05-01 09:30:00 | INFO     | omni_lister::lister | Found 2 files directory=/srv count=2
//! ```
//!
//! On the console, events below `WARN` go to stdout and `WARN`/`ERROR` go to
//! stderr. An optional log file receives every line without colors.
//!
//! # Examples
//!
//! ```no_run
//! use omni_core::LogConfig;
//!
//! let installed = omni_log::init_logging(&LogConfig::default())?;
//! assert!(installed);
//!
//! // Later calls are no-ops.
//! assert!(!omni_log::init_logging(&LogConfig::default())?);
//! # Ok::<(), omni_log::LogError>(())
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod error;
mod format;
mod init;

pub use error::LogError;
pub use format::LogFormat;
pub use init::{init_logging, is_initialized};
