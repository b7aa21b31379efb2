//! CLI entry point for omni-fs.
//!
//! `omni-ls` lists the regular files directly inside a directory, optionally
//! filtered by a glob pattern, sorted case-insensitively by name.
//!
//! # Usage
//!
//! ```bash
//! omni-ls [OPTIONS] [PATH]
//!
//! # Files in the current directory
//! omni-ls
//!
//! # Log files, including hidden ones, as full paths
//! omni-ls /var/log --pattern '*.log' --all --full-path
//!
//! # JSON array output
//! omni-ls ~/Downloads --json
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser};
use omni_core::{Config, ListOutput, LogLevel};
use omni_lister::DirectoryLister;
use tracing::debug;

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// List the files in a directory.
///
/// Subdirectories and symbolic links are never listed. Hidden files are
/// skipped unless `--all` is given.
#[derive(Debug, Parser)]
#[command(name = "omni-ls", version, about, long_about = None)]
struct Cli {
    /// Directory to list.
    ///
    /// Defaults to the current working directory.
    path: Option<Utf8PathBuf>,

    /// Glob pattern matched against file names (e.g. '*.log').
    #[arg(short = 'g', long)]
    pattern: Option<String>,

    /// Include hidden files (names starting with '.').
    #[arg(short = 'a', long = "all")]
    show_hidden: bool,

    /// Print full resolved paths instead of file names.
    #[arg(short = 'p', long)]
    full_path: bool,

    /// Print a JSON array instead of one entry per line.
    #[arg(long)]
    json: bool,

    /// JSON configuration file.
    #[arg(short, long, env = "OMNI_LS_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Append log lines to this file.
    #[arg(long, env = "OMNI_LS_LOG_FILE")]
    log_file: Option<Utf8PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Disable console logging.
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Builds the effective [`Config`] from the config file and CLI flags.
///
/// Flags override file values, which override defaults. Console logging
/// always goes to stderr so that stdout carries only the listing. Without a
/// config file the log level is `warn`.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded or the merged
/// configuration is invalid.
fn build_config(cli: &Cli) -> color_eyre::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => {
            let mut config = Config::default();
            config.logging.level = LogLevel::Warn;
            config
        }
    };

    if let Some(path) = &cli.path {
        config.listing.path = Some(path.clone());
    }
    if let Some(pattern) = &cli.pattern {
        config.listing.pattern = Some(pattern.clone());
    }
    config.listing.show_hidden |= cli.show_hidden;
    config.listing.return_paths |= cli.full_path;

    match cli.verbose {
        0 => {}
        1 => config.logging.level = LogLevel::Info,
        _ => config.logging.level = LogLevel::Debug,
    }
    if cli.quiet {
        config.logging.use_console = false;
    }
    // stdout is reserved for the listing
    config.logging.console_stderr = true;
    if let Some(log_file) = &cli.log_file {
        config.logging.log_file = Some(log_file.clone());
    }

    // Check if colors should be disabled (flag or NO_COLOR env var)
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        config.logging.ansi = false;
    }

    config.validate()?;
    Ok(config)
}

// =============================================================================
// COMMAND IMPLEMENTATION
// =============================================================================

/// Runs the listing and writes it to stdout.
///
/// # Errors
///
/// Returns an error if the listing fails or stdout cannot be written.
fn run_list(config: &Config, json: bool) -> color_eyre::Result<()> {
    let result = DirectoryLister::from_config(&config.listing).scan()?;
    debug!(directory = %result.directory(), count = result.len(), "Listing complete");

    let output = result.into_output(config.listing.return_paths);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_output(&mut handle, &output, json)?;
    handle.flush()?;

    Ok(())
}

/// Writes the listing as lines or as a pretty-printed JSON array.
fn write_output(out: &mut impl Write, output: &ListOutput, json: bool) -> color_eyre::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, output)?;
        writeln!(out)?;
    } else {
        for item in output.iter_str() {
            writeln!(out, "{item}")?;
        }
    }
    Ok(())
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Merge config file and flags
    let config = build_config(&cli)?;

    // 4. Initialize logging exactly once
    omni_log::init_logging(&config.logging)?;

    // 5. List
    run_list(&config, cli.json)
}
