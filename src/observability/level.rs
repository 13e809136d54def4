//! Log severity levels.

use core::fmt;

/// Severity level for log entries.
///
/// Ordered from least to most severe, so sinks can filter by comparison:
/// `entry.level() >= LogLevel::Warn`. The checking core itself emits exactly
/// two levels: `Info` for retry notices and `Warn` for terminal failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Fine-grained debugging information.
    Trace = 0,
    /// Debugging information for development.
    Debug = 1,
    /// General informational messages (retry notices).
    #[default]
    Info = 2,
    /// Terminal failures observed by a combinator.
    Warn = 3,
    /// Error conditions reported by the surrounding runtime.
    Error = 4,
}

impl LogLevel {
    /// Returns the level name as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Returns true if this level is at least as severe as `other`.
    #[must_use]
    pub const fn is_at_least(self, other: Self) -> bool {
        self as u8 >= other as u8
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
