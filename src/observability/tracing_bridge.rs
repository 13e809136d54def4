//! Optional bridge into the `tracing` ecosystem.
//!
//! Enabled by the `tracing-integration` feature. Installing a
//! [`TracingSink`] forwards every entry to the equivalent `tracing` event,
//! leaving filtering and formatting to the subscriber.

use super::entry::LogEntry;
use super::level::LogLevel;
use super::sink::LogSink;

/// A sink that forwards entries to `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the bridge sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn log(&self, entry: &LogEntry) {
        match entry.level() {
            LogLevel::Trace => tracing::trace!("{entry}"),
            LogLevel::Debug => tracing::debug!("{entry}"),
            LogLevel::Info => tracing::info!("{entry}"),
            LogLevel::Warn => tracing::warn!("{entry}"),
            LogLevel::Error => tracing::error!("{entry}"),
        }
    }
}
