//! Syscheck: uniform error classification, retry, and propagation for a
//! low-level systems runtime.
//!
//! # Overview
//!
//! Every subsystem of the surrounding runtime (networking, memory
//! management, device control, worker threads) turns raw OS call outcomes
//! into one consistently propagated result type through this crate. The
//! contract is total: transient interruptions are resolved exactly once, at
//! the syscall layer; every other failure is logged exactly once, at the
//! first combinator that observes it, and then forwarded unchanged to the
//! top of the chain. Nothing is silently suppressed and nothing is
//! downgraded.
//!
//! # Core Guarantees
//!
//! - **Closed classification**: every code maps into exactly one of
//!   {succeeded, pending, failed}; pending is never treated as failure
//! - **Local retry only**: EINTR/EAGAIN/EWOULDBLOCK are retried inside
//!   [`retry::sys_call`] and never surface; no layer above retries
//! - **Single-log propagation**: one warning per failure, at the origin,
//!   with the call site and the numeric code
//! - **First failure wins**: scoped cleanup and worker chains record the
//!   first terminal failure and never overwrite it
//! - **Cross-thread visibility**: a worker's final code is written once and
//!   ordered before its join, so the joiner always observes it
//!
//! # Module Structure
//!
//! - [`code`]: the [`ResultCode`] ABI and its three propagation classes
//! - [`classify`]: raw-outcome classification and the transient set
//! - [`retry`]: transient-retry wrapping of blocking calls and the
//!   no-retry thread-primitive check
//! - [`propagate`]: the `check`/`capture` propagation combinators
//! - [`cleanup`]: scoped-cleanup propagation with an explicit outcome slot
//! - [`sentinel`]: sentinel assertion checks for non-errno call contracts
//! - [`worker`]: the async completion context bridging worker and joiner
//! - [`observability`]: the logging collaborator interface

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

pub mod classify;
pub mod cleanup;
pub mod code;
pub mod observability;
pub mod propagate;
pub mod retry;
pub mod sentinel;
pub mod worker;

pub use classify::is_transient;
pub use cleanup::{OutcomeSlot, run_scoped};
pub use code::{CodeError, OpResult, Progress, ResultClass, ResultCode};
pub use propagate::{capture, check};
pub use retry::{sys_call, thread_call};
pub use sentinel::{ensure_eq, ensure_ne};
pub use worker::{CompletionCell, CompletionState, WorkerHandle, spawn_checked};
