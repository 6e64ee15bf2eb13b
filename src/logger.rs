//! Logging setup for the application
//!
//! While the TUI owns the terminal, nothing may print to stdout or stderr,
//! so logging goes to a file via `fern`, and only when enabled in the
//! configuration.

use anyhow::{Context, Result};

use crate::config::LoggingConfig;

/// Initialize file-backed logging if enabled in the configuration.
///
/// Safe to call exactly once at startup, before the terminal is put into
/// raw mode. A disabled config is a no-op, not an error.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_file = fern::log_file(&config.file)
        .with_context(|| format!("Failed to open log file: {}", config.file))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(log_file)
        .apply()
        .context("Failed to initialize logger")?;

    log::info!("logging initialized");
    Ok(())
}
