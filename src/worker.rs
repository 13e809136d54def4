//! Async completion context for worker threads.
//!
//! A chain running on a worker thread surfaces its final code to the thread
//! that joins it through a write-once [`CompletionCell`]. The worker writes
//! exactly once (first terminal failure or normal completion) and that
//! write happens-before `join` returns, so the joiner's read is guaranteed
//! to observe it. One worker owns one cell; there are no concurrent writers.

use crate::code::{OpResult, ResultCode};
use crate::observability::{LogEntry, ScopedSink, current, emit};
use std::io;
use std::sync::{Arc, OnceLock};
use std::thread;

/// Observable state of a worker's chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionState {
    /// The worker has not completed its chain yet.
    Running,
    /// The chain finished with a success-like or pending code.
    Succeeded,
    /// The chain aborted with the recorded terminal failure.
    Failed(ResultCode),
}

/// Write-once result slot bridging a worker thread to its joiner.
///
/// The state machine is `Running -> {Succeeded, Failed}`, terminal once
/// written; there is no transition back.
#[derive(Debug, Default)]
pub struct CompletionCell {
    slot: OnceLock<ResultCode>,
}

impl CompletionCell {
    fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Records the final code. Only the first write takes effect.
    fn complete(&self, code: ResultCode) {
        let _ = self.slot.set(code);
    }

    /// Returns the current state.
    ///
    /// `Running` is only a snapshot; the authoritative read is
    /// [`WorkerHandle::join`], which happens after the worker's write.
    #[must_use]
    pub fn state(&self) -> CompletionState {
        match self.slot.get() {
            None => CompletionState::Running,
            Some(code) if code.is_failure() => CompletionState::Failed(*code),
            Some(_) => CompletionState::Succeeded,
        }
    }
}

/// Handle to a spawned worker and its completion cell.
pub struct WorkerHandle {
    name: &'static str,
    cell: Arc<CompletionCell>,
    thread: thread::JoinHandle<()>,
}

impl WorkerHandle {
    /// Returns a handle to the completion cell for observation.
    #[must_use]
    pub fn cell(&self) -> Arc<CompletionCell> {
        Arc::clone(&self.cell)
    }

    /// Joins the worker, then reads the recorded code.
    ///
    /// A panicked worker is recorded and reported as
    /// [`ResultCode::SystemError`] with one warning.
    pub fn join(self) -> ResultCode {
        match self.thread.join() {
            Ok(()) => match self.cell.slot.get().copied() {
                Some(code) => code,
                // The spawn harness writes before the thread exits; a clean
                // join with an empty cell means that harness was bypassed.
                None => {
                    emit(
                        &LogEntry::warn(format!(
                            "worker {} exited without recording a result",
                            self.name
                        ))
                        .with_target(self.name)
                        .with_field("code", ResultCode::SystemError.raw().to_string())
                        .with_field("thread", "worker"),
                    );
                    self.cell.complete(ResultCode::SystemError);
                    ResultCode::SystemError
                }
            },
            Err(_panic) => {
                emit(
                    &LogEntry::warn(format!("worker {} panicked", self.name))
                        .with_target(self.name)
                        .with_field("code", ResultCode::SystemError.raw().to_string())
                        .with_field("thread", "worker"),
                );
                self.cell.complete(ResultCode::SystemError);
                ResultCode::SystemError
            }
        }
    }
}

/// Spawns a named worker thread running a checked chain.
///
/// The worker executes `f`, flattens the result to a code, logs any failure
/// once with a worker-thread marker, and writes the code into the cell
/// before exiting. The spawner's active log sink is carried onto the worker
/// so the chain's log trail stays attached to the spawning context.
pub fn spawn_checked(
    name: &'static str,
    f: impl FnOnce() -> OpResult + Send + 'static,
) -> io::Result<WorkerHandle> {
    let cell = Arc::new(CompletionCell::new());
    let worker_cell = Arc::clone(&cell);
    let sink = current();

    let thread = thread::Builder::new().name(name.to_string()).spawn(move || {
        let _sink_guard = sink.map(ScopedSink::new);
        let code = ResultCode::from(f());
        if code.is_failure() {
            emit(
                &LogEntry::warn(format!("worker {name} -> {}", code.raw()))
                    .with_target(name)
                    .with_field("code", code.raw().to_string())
                    .with_field("thread", "worker"),
            );
        }
        worker_cell.complete(code);
    })?;

    Ok(WorkerHandle { name, cell, thread })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Progress;
    use crate::propagate::check;

    #[test]
    fn successful_chain_reports_success() {
        let handle = spawn_checked("ok-worker", || {
            check(ResultCode::Success)?;
            Ok(Progress::Complete)
        })
        .expect("spawn");

        assert_eq!(handle.join(), ResultCode::Success);
    }

    #[test]
    fn pending_chain_reports_in_progress() {
        let handle = spawn_checked("pending-worker", || Ok(Progress::Pending)).expect("spawn");
        assert_eq!(handle.join(), ResultCode::InProgress);
    }

    #[test]
    fn first_failure_wins_over_later_steps() {
        let handle = spawn_checked("failing-worker", || {
            check(ResultCode::Success)?;
            check(ResultCode::Domain(7))?;
            // Never reached; a later failure could not overwrite anyway.
            check(ResultCode::Domain(8))?;
            Ok(Progress::Complete)
        })
        .expect("spawn");

        assert_eq!(handle.join(), ResultCode::Domain(7));
    }

    #[test]
    fn cell_state_is_terminal_after_join() {
        let handle = spawn_checked("state-worker", || Err(ResultCode::SystemError)).expect("spawn");
        let cell = handle.cell();
        let code = handle.join();
        assert_eq!(code, ResultCode::SystemError);
        assert_eq!(cell.state(), CompletionState::Failed(ResultCode::SystemError));
    }

    #[test]
    fn join_without_a_recorded_result_warns_and_fails() {
        use crate::observability::{CollectorSink, LogLevel, LogSink};

        let collector = Arc::new(CollectorSink::new());
        let _guard = ScopedSink::new(Arc::clone(&collector) as Arc<dyn LogSink>);

        // Bypass the spawn harness: the thread exits cleanly but never
        // writes its cell.
        let cell = Arc::new(CompletionCell::new());
        let thread = thread::Builder::new()
            .name("bare-worker".to_string())
            .spawn(|| {})
            .expect("spawn");
        let handle = WorkerHandle {
            name: "bare-worker",
            cell: Arc::clone(&cell),
            thread,
        };

        assert_eq!(handle.join(), ResultCode::SystemError);
        assert_eq!(cell.state(), CompletionState::Failed(ResultCode::SystemError));
        assert_eq!(collector.count_at(LogLevel::Warn), 1);

        let entries = collector.snapshot();
        assert_eq!(entries[0].target(), Some("bare-worker"));
        assert!(entries[0].message().contains("without recording a result"));
    }

    #[test]
    fn panicked_worker_becomes_system_error() {
        let handle = spawn_checked("panic-worker", || panic!("boom")).expect("spawn");
        let cell = handle.cell();
        assert_eq!(handle.join(), ResultCode::SystemError);
        assert_eq!(cell.state(), CompletionState::Failed(ResultCode::SystemError));
    }
}
