//! Scoped-cleanup propagation.
//!
//! For functions that have already acquired a resource, a failed check must
//! not return directly: it records the failure and transfers control to a
//! single cleanup point that runs on every exit path. [`run_scoped`] gives
//! that shape structurally: the body early-exits with
//! [`ControlFlow::Break`], the cleanup closure always runs, and the
//! [`OutcomeSlot`] keeps the first recorded failure.

use crate::code::{Progress, ResultCode};
use crate::propagate::check_at;
use core::ops::ControlFlow;
use core::panic::Location;

/// Explicit outcome variable with first-failure-wins semantics.
///
/// Starts as `Success`. Non-failure codes may overwrite each other (a chain
/// can move between success and pending), but once a failure is recorded no
/// later step, failing or succeeding, replaces it.
#[derive(Debug)]
pub struct OutcomeSlot {
    code: ResultCode,
}

impl OutcomeSlot {
    /// Creates a slot holding `Success`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            code: ResultCode::Success,
        }
    }

    /// Returns the recorded code.
    #[must_use]
    pub const fn code(&self) -> ResultCode {
        self.code
    }

    /// Records a code; the first failure wins.
    pub fn record(&mut self, code: ResultCode) {
        if !self.code.is_failure() {
            self.code = code;
        }
    }

    /// Observes a bare sub-operation code, logging on failure.
    ///
    /// Same classification as [`check`](crate::propagate::check): a failure
    /// logs once at this call site, is recorded, and breaks to the cleanup
    /// point. Success-like and pending codes continue.
    #[track_caller]
    pub fn check(&mut self, code: ResultCode) -> ControlFlow<(), Progress> {
        match check_at(code, Location::caller()) {
            Ok(progress) => {
                self.record(progress.into());
                ControlFlow::Continue(progress)
            }
            Err(code) => {
                self.record(code);
                ControlFlow::Break(())
            }
        }
    }

    /// Forwards a leaf wrapper's result without logging again.
    ///
    /// The leaf ([`sys_call`](crate::retry::sys_call),
    /// [`ensure_eq`](crate::sentinel::ensure_eq), ...) already logged at the
    /// origin; this records the code and breaks on failure, passing the
    /// success value through.
    pub fn forward<T>(&mut self, res: Result<T, ResultCode>) -> ControlFlow<(), T> {
        match res {
            Ok(value) => ControlFlow::Continue(value),
            Err(code) => {
                self.record(code);
                ControlFlow::Break(())
            }
        }
    }
}

impl Default for OutcomeSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `body` with a fresh slot, then always runs `cleanup` exactly once.
///
/// The body early-exits by returning `Break` (usually via `?` on
/// [`OutcomeSlot::check`] / [`OutcomeSlot::forward`]); either way control
/// reaches `cleanup`, which receives the recorded code so conditional
/// rollback can key off it. The recorded code is returned afterwards.
///
/// A panic inside `body` propagates; releasing resources under unwind is the
/// job of the caller's `Drop` implementations, not of this combinator.
pub fn run_scoped(
    body: impl FnOnce(&mut OutcomeSlot) -> ControlFlow<()>,
    cleanup: impl FnOnce(ResultCode),
) -> ResultCode {
    let mut slot = OutcomeSlot::new();
    let _ = body(&mut slot);
    cleanup(slot.code());
    slot.code()
}
