//! Pluggable log sinks.
//!
//! The checking core owns no logging configuration: it hands every
//! [`LogEntry`] to a collaborator implementing [`LogSink`] and moves on.
//! Resolution order is the innermost thread-scoped sink (see [`ScopedSink`]),
//! then the process-global sink installed with [`set_sink`]. With neither in
//! place entries are dropped.

use super::entry::LogEntry;
use super::level::LogLevel;
use parking_lot::{Mutex, RwLock};
use std::cell::RefCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// A logging collaborator.
///
/// Sinks receive every entry the core emits; verbosity and filtering are the
/// sink's responsibility.
pub trait LogSink: Send + Sync {
    /// Consumes one log entry.
    fn log(&self, entry: &LogEntry);
}

static GLOBAL_SINK: RwLock<Option<Arc<dyn LogSink>>> = RwLock::new(None);
static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(1);

struct ScopeEntry {
    id: u64,
    sink: Arc<dyn LogSink>,
}

thread_local! {
    static SCOPED_SINKS: RefCell<Vec<ScopeEntry>> = const { RefCell::new(Vec::new()) };
}

/// Installs the process-global sink.
pub fn set_sink(sink: Arc<dyn LogSink>) {
    *GLOBAL_SINK.write() = Some(sink);
}

/// Removes the process-global sink.
pub fn clear_sink() {
    *GLOBAL_SINK.write() = None;
}

/// Returns the sink the current thread would log to, if any.
///
/// Worker spawning uses this to carry the spawner's sink onto the worker
/// thread so a chain's log trail stays attached to its context.
#[must_use]
pub(crate) fn current() -> Option<Arc<dyn LogSink>> {
    let scoped = SCOPED_SINKS.with(|stack| stack.borrow().last().map(|entry| Arc::clone(&entry.sink)));
    scoped.or_else(|| GLOBAL_SINK.read().clone())
}

/// Hands one entry to the active sink, dropping it if there is none.
pub(crate) fn emit(entry: &LogEntry) {
    if let Some(sink) = current() {
        sink.log(entry);
    }
}

/// Guard that overrides the sink for the current thread.
///
/// Dropping the guard restores the previous override. Guards may drop out of
/// order; each removes only its own entry from the stack.
pub struct ScopedSink {
    id: u64,
    active: bool,
}

impl ScopedSink {
    /// Pushes a thread-scoped sink override.
    #[must_use]
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        let id = NEXT_SCOPE_ID.fetch_add(1, Ordering::Relaxed);
        SCOPED_SINKS.with(|stack| {
            stack.borrow_mut().push(ScopeEntry { id, sink });
        });
        Self { id, active: true }
    }
}

impl Drop for ScopedSink {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        SCOPED_SINKS.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(pos) = stack.iter().rposition(|entry| entry.id == self.id) {
                stack.remove(pos);
            }
        });
        self.active = false;
    }
}

/// A sink that accumulates entries for later inspection.
///
/// Intended for tests and diagnostics: install one (globally or scoped),
/// drive the code under test, then inspect the captured entries.
#[derive(Default)]
pub struct CollectorSink {
    min_level: LogLevel,
    entries: Mutex<Vec<LogEntry>>,
}

impl CollectorSink {
    /// Creates a collector accepting every level.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Trace,
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Sets the minimum level to retain.
    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Returns a copy of the captured entries.
    #[must_use]
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Counts captured entries at exactly the given level.
    #[must_use]
    pub fn count_at(&self, level: LogLevel) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.level() == level)
            .count()
    }

    /// Discards all captured entries.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl LogSink for CollectorSink {
    fn log(&self, entry: &LogEntry) {
        if entry.level().is_at_least(self.min_level) {
            self.entries.lock().push(entry.clone());
        }
    }
}
