//! Failure propagation combinators.
//!
//! [`check`] is the one observation point for failures crossing a subsystem
//! boundary: a failed code gets exactly one diagnostic log line, at the
//! first call site that sees it, and is then forwarded unchanged by `?`
//! through every layer above. Success-like and pending codes pass through
//! silently.

use crate::code::{OpResult, Progress, ResultClass, ResultCode};
use crate::observability::{LogEntry, emit};
use core::panic::Location;

/// Observes one sub-operation's code.
///
/// `Success` and `InProgress` continue normal control flow. Any other code
/// logs one warning with the call site and the numeric code, then comes back
/// as `Err` so `?` returns it to the caller unchanged. No partial retry
/// happens at this layer, and nesting preserves the innermost failure
/// exactly.
#[track_caller]
pub fn check(code: ResultCode) -> OpResult {
    check_at(code, Location::caller())
}

pub(crate) fn check_at(code: ResultCode, location: &'static Location<'static>) -> OpResult {
    match code.class() {
        ResultClass::Succeeded => Ok(Progress::Complete),
        ResultClass::Pending => Ok(Progress::Pending),
        ResultClass::Failed => {
            emit(
                &LogEntry::warn(format!(
                    "{}:{} -> {}",
                    location.file(),
                    location.line(),
                    code.raw()
                ))
                .with_location(location)
                .with_field("code", code.raw().to_string()),
            );
            Err(code)
        }
    }
}

/// Runs a chain and flattens its result back to the ABI code.
///
/// This is the adapter between the `?`-based chain shape and a subsystem
/// entry point that returns a bare [`ResultCode`].
pub fn capture(f: impl FnOnce() -> OpResult) -> ResultCode {
    ResultCode::from(f())
}
