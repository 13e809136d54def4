//! Worker-thread completion scenarios.
//!
//! A failure inside a detached unit of work must surface to the thread that
//! joins it, with the first terminal failure winning and the log trail
//! staying attached to the spawning context.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use syscheck::observability::{CollectorSink, LogLevel, LogSink, ScopedSink};
use syscheck::{CompletionState, Progress, ResultCode, check, spawn_checked};

#[test]
fn joiner_reads_the_second_operations_failure() {
    let first_ran = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&first_ran);

    let handle = spawn_checked("init-worker", move || {
        check(ResultCode::Success)?;
        counter.fetch_add(1, Ordering::Relaxed);
        check(ResultCode::Domain(21))?;
        Ok(Progress::Complete)
    })
    .expect("spawn");

    assert_eq!(handle.join(), ResultCode::Domain(21));
    assert_eq!(first_ran.load(Ordering::Relaxed), 1);
}

#[test]
fn worker_failure_is_logged_with_the_worker_marker() {
    let collector = Arc::new(CollectorSink::new());
    let _guard = ScopedSink::new(Arc::clone(&collector) as Arc<dyn LogSink>);

    let handle = spawn_checked("net-worker", || {
        check(ResultCode::SystemError)?;
        Ok(Progress::Complete)
    })
    .expect("spawn");
    assert_eq!(handle.join(), ResultCode::SystemError);

    // The spawner's sink was carried onto the worker: the origin warning
    // from `check` plus the worker-level marker both land here.
    let entries = collector.snapshot();
    assert_eq!(collector.count_at(LogLevel::Warn), 2);
    assert!(
        entries
            .iter()
            .any(|e| e.field("thread") == Some("worker") && e.target() == Some("net-worker"))
    );
}

#[test]
fn successful_worker_logs_nothing() {
    let collector = Arc::new(CollectorSink::new());
    let _guard = ScopedSink::new(Arc::clone(&collector) as Arc<dyn LogSink>);

    let handle = spawn_checked("quiet-worker", || Ok(Progress::Complete)).expect("spawn");
    assert_eq!(handle.join(), ResultCode::Success);
    assert!(collector.snapshot().is_empty());
}

#[test]
fn cell_can_be_observed_after_join() {
    let handle = spawn_checked("observed-worker", || Err(ResultCode::Domain(5))).expect("spawn");
    let cell = handle.cell();
    assert_eq!(handle.join(), ResultCode::Domain(5));
    assert_eq!(cell.state(), CompletionState::Failed(ResultCode::Domain(5)));
}

#[test]
fn many_workers_each_own_their_cell() {
    let handles: Vec<_> = (0u16..8)
        .map(|i| {
            let code = if i % 2 == 0 {
                ResultCode::Success
            } else {
                ResultCode::Domain(100 + i)
            };
            (
                i,
                spawn_checked("pool-worker", move || code.into_op()).expect("spawn"),
            )
        })
        .collect();

    for (i, handle) in handles {
        let expected = if i % 2 == 0 {
            ResultCode::Success
        } else {
            ResultCode::Domain(100 + i)
        };
        assert_eq!(handle.join(), expected);
    }
}
