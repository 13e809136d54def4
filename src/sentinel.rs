//! Sentinel assertion checks.
//!
//! Some calls express success through an arbitrary return-value contract
//! instead of the errno channel. These checks compare the returned value
//! against an expected sentinel, in either direction, and classify any
//! mismatch as [`ResultCode::SystemError`], with one warning at the call
//! site. Composed through a slot (`slot.forward(ensure_eq(..))?`) they give
//! the scoped-cleanup variant.

use crate::code::{OpResult, Progress, ResultCode};
use crate::observability::{LogEntry, emit};
use core::fmt::Debug;
use core::panic::Location;

/// Fails unless `actual` equals `expected`.
#[track_caller]
pub fn ensure_eq<T: PartialEq + Debug>(name: &'static str, actual: T, expected: T) -> OpResult {
    if actual == expected {
        Ok(Progress::Complete)
    } else {
        mismatch_at(
            name,
            format!("expected {expected:?}, got {actual:?}"),
            Location::caller(),
        )
    }
}

/// Fails if `actual` equals the failure sentinel.
#[track_caller]
pub fn ensure_ne<T: PartialEq + Debug>(name: &'static str, actual: T, sentinel: T) -> OpResult {
    if actual == sentinel {
        mismatch_at(
            name,
            format!("returned failure sentinel {sentinel:?}"),
            Location::caller(),
        )
    } else {
        Ok(Progress::Complete)
    }
}

fn mismatch_at(name: &'static str, detail: String, location: &'static Location<'static>) -> OpResult {
    let code = ResultCode::SystemError;
    emit(
        &LogEntry::warn(format!(
            "{}:{} -> {} ({name}: {detail})",
            location.file(),
            location.line(),
            code.raw()
        ))
        .with_target(name)
        .with_location(location)
        .with_field("code", code.raw().to_string()),
    );
    Err(code)
}
