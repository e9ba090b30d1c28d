//! Tracing infrastructure for development diagnostics
//!
//! The controllers emit debug/trace events at every pairing decision
//! (skip-over, auto-close, coordinated deletion), which is usually enough to
//! see why a keystroke did or did not pair.
//!
//! # Usage
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=autopair=trace` - everything this crate emits
//!
//! # Log Files
//!
//! Logs are written to `~/.config/autopair/logs/autopair.log` with daily
//! rotation. File logging uses debug level for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects the RUST_LOG env var for filtering and defaults
/// to `warn`. File logging writes to `~/.config/autopair/logs/autopair.log`
/// with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "autopair.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
