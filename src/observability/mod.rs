//! The logging collaborator interface.
//!
//! This module is the narrow seam between the checking core and whatever
//! logging backend the surrounding runtime uses:
//!
//! - [`level`]: severity levels, ordered for comparison-based filtering
//! - [`entry`]: structured log entries with operation name, source location,
//!   and key/value fields
//! - [`sink`]: the [`LogSink`] trait, the global/scoped sink registry, and a
//!   capturing [`CollectorSink`] for tests
//! - [`tracing_bridge`]: optional forwarding to `tracing` (feature
//!   `tracing-integration`)
//!
//! The core emits exactly two severities: `Info` for retry notices and
//! `Warn` for terminal failures, always carrying the operation name or the
//! captured source location plus the failure code.

pub mod entry;
pub mod level;
pub mod sink;
#[cfg(feature = "tracing-integration")]
pub mod tracing_bridge;

pub use entry::{LogEntry, SourceLocation};
pub use level::LogLevel;
pub use sink::{CollectorSink, LogSink, ScopedSink, clear_sink, set_sink};
#[cfg(feature = "tracing-integration")]
pub use tracing_bridge::TracingSink;

pub(crate) use sink::{current, emit};
