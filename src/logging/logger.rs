// file: src/logging/logger.rs
// version: 1.0.0
// guid: 73a9e1c5-4d82-4f60-b5a3-9c0e6d28f417

//! Logger initialization: compact stdout output plus a timestamped,
//! append-only log file in the working directory

use crate::Result;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the logging system and return the path of the log file.
///
/// Console verbosity follows the CLI flags; the file layer always records at
/// debug level and without ANSI colors, so the log stays complete even when
/// the console is quiet.
pub fn init_logger(verbose: bool, quiet: bool) -> Result<PathBuf> {
    let console_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter_stdout =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(console_level));
    let filter_file = EnvFilter::new("debug");

    let now = chrono::Local::now();
    let log_filename = format!("vscode-install-agent-{}.log", now.format("%Y%m%d_%H%M%S"));

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_filename)?;

    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_writer(io::stdout)
        .compact()
        .with_filter(filter_stdout);

    let file_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false) // No ANSI colors in log files
        .with_writer(file)
        .with_filter(filter_file);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| {
            crate::InstallerError::config(format!("Failed to initialize logger: {}", e))
        })?;

    Ok(PathBuf::from(log_filename))
}
