//! Logging configuration and setup
//!
//! This module provides tracing initialization for catalog diagnostics.
//! The catalog itself only emits events through the `tracing` facade; with
//! no subscriber installed those events are no-ops, so enabling catalog
//! diagnostics without calling [`init_logging`] degrades silently.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize a global tracing subscriber based on configuration.
///
/// Best-effort: if another subscriber is already installed this call is a
/// no-op rather than a failure.
pub fn init_logging(config: &LoggingConfig) {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .try_init();
}
