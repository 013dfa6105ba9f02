//! Tracing initialization and subscriber setup.
//!
//! Stdout carries the selected value and the terminal carries the UI, so log
//! output goes to a file. Nothing is installed unless a log level is
//! configured.

use super::file_writer::FileWriter;
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with a rotating log file.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters spans and events with `config.log_level` as an `EnvFilter` directive
/// 2. Formats them as plain text without ANSI colors
/// 3. Appends them to `config.log_file` through a [`FileWriter`]
///
/// # Initialization Behavior
///
/// - No-op when `config.log_level` is `None`
/// - Creates the log directory if it doesn't exist
/// - Silently gives up if the directory cannot be created (logging is optional)
/// - Idempotent: only the first successful call installs a subscriber
///
/// # Example
///
/// ```rust
/// use tabpick::observability::init_tracing;
/// use tabpick::Config;
///
/// let config = Config::default();
/// init_tracing(&config); // log_level is None, nothing happens
/// tracing::debug!("not recorded");
/// ```
pub fn init_tracing(config: &Config) {
    let Some(level) = config.log_level.as_deref() else {
        return;
    };

    if let Some(parent) = config.log_file.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let writer = Arc::new(FileWriter::new(config.log_file.clone()));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer);

    if subscriber.try_init().is_ok() {
        tracing::debug!(log_file = %config.log_file.display(), "tracing initialized");
    }
}
