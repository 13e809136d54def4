//! Transient-retry wrapping of blocking system calls and thread primitives.
//!
//! [`sys_call`] is the only place in the runtime where transient OS
//! interruptions are resolved; everything above it sees either success or a
//! terminal code. [`thread_call`] covers thread primitives, which report
//! failure through their return code and never through the errno channel.

use crate::classify::{Classified, classify};
use crate::code::ResultCode;
use crate::observability::{LogEntry, emit};
use std::io;

/// Invokes a blocking system call until it succeeds or fails terminally.
///
/// Transient interruptions (EINTR, EAGAIN, EWOULDBLOCK) are retried with one
/// informational log line per retry; the wrapper trusts the OS to resolve
/// them and never sleeps or backs off. A terminal failure logs one warning
/// and yields [`ResultCode::SystemError`]; the retry signal itself never
/// reaches the caller.
///
/// An operation that returns would-block synchronously in a loop produces a
/// deliberate tight retry loop: the wrapper imposes no rate limiting, and
/// callers needing pacing must build it into the operation itself.
pub fn sys_call<T>(
    name: &'static str,
    mut op: impl FnMut() -> io::Result<T>,
) -> Result<T, ResultCode> {
    loop {
        match classify(op()) {
            Classified::Ok(value) => return Ok(value),
            Classified::Retry(err) => {
                emit(
                    &LogEntry::info(format!("call to {name} returned {err}, retrying"))
                        .with_target(name),
                );
            }
            Classified::Fatal(err) => {
                emit(
                    &LogEntry::warn(format!("call to {name} failed: {err}"))
                        .with_target(name)
                        .with_field("code", ResultCode::SystemError.raw().to_string()),
                );
                return Err(ResultCode::SystemError);
            }
        }
    }
}

/// Checks a thread-primitive call that reports failure via its return code.
///
/// Thread primitives do not use the errno channel and are documented by the
/// platform contract never to return the interrupted condition, so any
/// nonzero code is terminal immediately: the operation runs exactly once and
/// there is no retry path.
pub fn thread_call(name: &'static str, op: impl FnOnce() -> i32) -> Result<(), ResultCode> {
    let rc = op();
    if rc == 0 {
        return Ok(());
    }
    let err = io::Error::from_raw_os_error(rc);
    emit(
        &LogEntry::warn(format!("call to {name} failed: {err}"))
            .with_target(name)
            .with_field("code", ResultCode::SystemError.raw().to_string())
            .with_field("os_code", rc.to_string()),
    );
    Err(ResultCode::SystemError)
}
