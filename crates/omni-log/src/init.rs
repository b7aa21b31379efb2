//! One-time installation of the global `tracing` subscriber.

use std::fs::OpenOptions;
use std::io;
use std::sync::{Mutex, PoisonError};

use omni_core::LogConfig;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::LogError;
use crate::format::LogFormat;

/// Set once the subscriber has been installed by this crate.
static CONFIGURED: Mutex<bool> = Mutex::new(false);

/// Installs the process-wide logger described by `config`.
///
/// Only the first successful call has any effect. Later calls return
/// `Ok(false)` without adding output layers, whatever `config` they pass.
///
/// The `RUST_LOG` environment variable, when set, overrides `config.level`.
///
/// # Returns
///
/// `Ok(true)` if this call installed the logger, `Ok(false)` if it was
/// already installed.
///
/// # Errors
///
/// Returns [`LogError::LogFile`] if the log file cannot be opened and
/// [`LogError::Install`] if a different global subscriber already exists.
/// A failed call leaves the logger uninstalled, so it may be retried.
pub fn init_logging(config: &LogConfig) -> Result<bool, LogError> {
    let mut configured = CONFIGURED.lock().unwrap_or_else(PoisonError::into_inner);
    if *configured {
        return Ok(false);
    }

    install(config)?;
    *configured = true;

    tracing::debug!(level = %config.level, log_file = ?config.log_file, "Logging initialized");
    Ok(true)
}

/// Returns `true` once [`init_logging`] has succeeded in this process.
#[must_use]
pub fn is_initialized() -> bool {
    *CONFIGURED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Picks the console streams.
///
/// WARN and ERROR always go to stderr. Lower levels go to stdout unless
/// `stderr_only` is set.
fn console_writer(stderr_only: bool) -> BoxMakeWriter {
    if stderr_only {
        BoxMakeWriter::new(io::stderr)
    } else {
        BoxMakeWriter::new(io::stderr.with_max_level(Level::WARN).or_else(io::stdout))
    }
}

/// Builds the layers and sets them as the global default.
fn install(config: &LogConfig) -> Result<(), LogError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let console = config.use_console.then(|| {
        fmt::layer()
            .event_format(LogFormat::default())
            .with_ansi(config.ansi)
            .with_writer(console_writer(config.console_stderr))
    });

    let file = match &config.log_file {
        Some(path) => {
            let handle = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LogError::LogFile {
                    path: path.clone(),
                    source,
                })?;

            Some(
                fmt::layer()
                    .event_format(LogFormat::default())
                    .with_ansi(false)
                    .with_writer(Mutex::new(handle)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .with(filter)
        .try_init()?;

    Ok(())
}
