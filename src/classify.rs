//! Classification of raw call outcomes.
//!
//! A blocking call hands back an `io::Result` whose error carries the raw OS
//! code read at the call site. Classification splits that outcome three ways:
//! success, a retry signal for the transient set (EINTR, EAGAIN,
//! EWOULDBLOCK), or a terminal system error. The retry signal is internal:
//! it is consumed by [`retry`](crate::retry) and never escapes as a
//! [`ResultCode`](crate::code::ResultCode).

use std::io;

/// Returns true if the error is in the transient set.
///
/// Transient conditions are OS-reported interruptions expected to resolve if
/// the call is simply repeated: `Interrupted` (EINTR) and `WouldBlock`
/// (EAGAIN / EWOULDBLOCK, which std folds into one kind).
#[must_use]
pub fn is_transient(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock
    )
}

/// One classified invocation of a blocking call.
#[derive(Debug)]
pub(crate) enum Classified<T> {
    /// The call succeeded.
    Ok(T),
    /// Transient interruption; invoke again.
    Retry(io::Error),
    /// Terminal failure.
    Fatal(io::Error),
}

pub(crate) fn classify<T>(outcome: io::Result<T>) -> Classified<T> {
    match outcome {
        Ok(value) => Classified::Ok(value),
        Err(err) if is_transient(&err) => Classified::Retry(err),
        Err(err) => Classified::Fatal(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupted_and_would_block_are_transient() {
        assert!(is_transient(&io::Error::from(io::ErrorKind::Interrupted)));
        assert!(is_transient(&io::Error::from(io::ErrorKind::WouldBlock)));
    }

    #[test]
    fn other_kinds_are_terminal() {
        assert!(!is_transient(&io::Error::from(io::ErrorKind::NotFound)));
        assert!(!is_transient(&io::Error::from(
            io::ErrorKind::PermissionDenied
        )));
        assert!(!is_transient(&io::Error::other("boom")));
    }

    #[cfg(unix)]
    #[test]
    fn raw_eintr_is_transient() {
        // EINTR is 4 on every Unix this runtime targets.
        assert!(is_transient(&io::Error::from_raw_os_error(4)));
    }

    #[test]
    fn classification_splits_three_ways() {
        assert!(matches!(classify(Ok(17)), Classified::Ok(17)));
        assert!(matches!(
            classify::<()>(Err(io::Error::from(io::ErrorKind::Interrupted))),
            Classified::Retry(_)
        ));
        assert!(matches!(
            classify::<()>(Err(io::Error::from(io::ErrorKind::NotFound))),
            Classified::Fatal(_)
        ));
    }
}
