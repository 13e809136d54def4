//! The result-code ABI shared by every subsystem of the runtime.
//!
//! [`ResultCode`] is the single boundary type that networking, memory
//! management, device control, and worker threads exchange. Every code maps
//! into exactly one of three propagation classes ([`ResultClass`]): succeeded,
//! pending, or failed. Anything that is not success-like or pending is a
//! terminal failure and is forwarded unchanged by the combinators in
//! [`propagate`](crate::propagate); codes are never re-classified on the way
//! up.

use core::fmt;

/// Raw value of [`ResultCode::Success`].
pub const RAW_SUCCESS: u16 = 0;
/// Raw value of [`ResultCode::InProgress`].
pub const RAW_IN_PROGRESS: u16 = 1;
/// Raw value of [`ResultCode::SystemError`].
pub const RAW_SYSTEM_ERROR: u16 = 2;

/// Classified outcome of a runtime operation.
///
/// The variants `Success`, `InProgress`, and `SystemError` are owned by this
/// crate; `Domain` carries caller-defined codes that this crate treats
/// opaquely. Raw values `0..=2` are reserved for the owned variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
    /// The operation completed.
    Success,
    /// The operation is legitimately still pending. Non-terminal: treated
    /// like success for propagation purposes, but distinct for caller logic.
    InProgress,
    /// An operating-system or thread-primitive call failed terminally.
    SystemError,
    /// A caller-defined code. Always a terminal failure for propagation;
    /// never retried, never re-classified, never downgraded.
    Domain(u16),
}

/// The three propagation classes every code maps into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultClass {
    /// Terminal, positive.
    Succeeded,
    /// Non-terminal; must never be treated as a failure.
    Pending,
    /// Terminal failure; propagated unchanged, never retried above the
    /// syscall layer.
    Failed,
}

impl ResultCode {
    /// Maps this code into its propagation class.
    #[must_use]
    pub const fn class(self) -> ResultClass {
        match self {
            Self::Success => ResultClass::Succeeded,
            Self::InProgress => ResultClass::Pending,
            Self::SystemError | Self::Domain(_) => ResultClass::Failed,
        }
    }

    /// Returns true if this code is a terminal failure.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self.class(), ResultClass::Failed)
    }

    /// Returns the stable numeric form used in diagnostic log lines.
    ///
    /// Domain codes carry their own value; `0..=2` are reserved for the
    /// owned variants.
    #[must_use]
    pub const fn raw(self) -> u16 {
        match self {
            Self::Success => RAW_SUCCESS,
            Self::InProgress => RAW_IN_PROGRESS,
            Self::SystemError => RAW_SYSTEM_ERROR,
            Self::Domain(value) => value,
        }
    }

    /// Reconstructs a code from its numeric form.
    ///
    /// Reserved values map to the owned variants; everything else is an
    /// opaque domain code.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        match raw {
            RAW_SUCCESS => Self::Success,
            RAW_IN_PROGRESS => Self::InProgress,
            RAW_SYSTEM_ERROR => Self::SystemError,
            value => Self::Domain(value),
        }
    }

    /// Lifts this code into the chain-internal [`OpResult`] shape without
    /// logging. Failure observation with logging is
    /// [`check`](crate::propagate::check).
    pub const fn into_op(self) -> OpResult {
        match self.class() {
            ResultClass::Succeeded => Ok(Progress::Complete),
            ResultClass::Pending => Ok(Progress::Pending),
            ResultClass::Failed => Err(self),
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::InProgress => write!(f, "inProgress"),
            Self::SystemError => write!(f, "systemError"),
            Self::Domain(value) => write!(f, "domain({value})"),
        }
    }
}

/// Non-failure progress of a chained operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Progress {
    /// The step completed (maps to [`ResultCode::Success`]).
    Complete,
    /// The step is still pending (maps to [`ResultCode::InProgress`]).
    Pending,
}

/// The chain-internal result shape.
///
/// `Ok` carries non-failure progress so that `?` forwards any terminal
/// failure unchanged while pending results keep flowing like success.
pub type OpResult = Result<Progress, ResultCode>;

impl From<Progress> for ResultCode {
    fn from(progress: Progress) -> Self {
        match progress {
            Progress::Complete => Self::Success,
            Progress::Pending => Self::InProgress,
        }
    }
}

impl From<OpResult> for ResultCode {
    fn from(res: OpResult) -> Self {
        match res {
            Ok(progress) => progress.into(),
            Err(code) => code,
        }
    }
}

/// A failure code adapted to `std::error::Error` for interop at crate
/// boundaries. The wrapped code is preserved exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("operation failed with result code {0}")]
pub struct CodeError(pub ResultCode);

impl From<ResultCode> for CodeError {
    fn from(code: ResultCode) -> Self {
        Self(code)
    }
}

impl From<CodeError> for ResultCode {
    fn from(err: CodeError) -> Self {
        err.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_codes_map_to_their_classes() {
        assert_eq!(ResultCode::Success.class(), ResultClass::Succeeded);
        assert_eq!(ResultCode::InProgress.class(), ResultClass::Pending);
        assert_eq!(ResultCode::SystemError.class(), ResultClass::Failed);
        assert_eq!(ResultCode::Domain(7).class(), ResultClass::Failed);
    }

    #[test]
    fn pending_is_not_a_failure() {
        assert!(!ResultCode::InProgress.is_failure());
        assert!(!ResultCode::Success.is_failure());
        assert!(ResultCode::SystemError.is_failure());
        assert!(ResultCode::Domain(42).is_failure());
    }

    #[test]
    fn raw_round_trip_for_reserved_values() {
        assert_eq!(ResultCode::from_raw(RAW_SUCCESS), ResultCode::Success);
        assert_eq!(ResultCode::from_raw(RAW_IN_PROGRESS), ResultCode::InProgress);
        assert_eq!(ResultCode::from_raw(RAW_SYSTEM_ERROR), ResultCode::SystemError);
        assert_eq!(ResultCode::from_raw(7), ResultCode::Domain(7));
    }

    #[test]
    fn op_result_flattens_back_to_the_same_code() {
        assert_eq!(
            ResultCode::from(ResultCode::Success.into_op()),
            ResultCode::Success
        );
        assert_eq!(
            ResultCode::from(ResultCode::InProgress.into_op()),
            ResultCode::InProgress
        );
        assert_eq!(
            ResultCode::from(ResultCode::Domain(9).into_op()),
            ResultCode::Domain(9)
        );
    }

    #[test]
    fn code_error_preserves_the_code() {
        let err = CodeError::from(ResultCode::Domain(3));
        assert_eq!(ResultCode::from(err), ResultCode::Domain(3));
        let text = err.to_string();
        assert!(text.contains("domain(3)"), "{text}");
    }

    #[test]
    fn display_forms() {
        assert_eq!(ResultCode::Success.to_string(), "success");
        assert_eq!(ResultCode::InProgress.to_string(), "inProgress");
        assert_eq!(ResultCode::SystemError.to_string(), "systemError");
        assert_eq!(ResultCode::Domain(11).to_string(), "domain(11)");
    }
}
