//! Structured log entries.
//!
//! Every diagnostic this crate emits is a [`LogEntry`]: a severity, a
//! formatted message, and optionally the operation name, a captured source
//! location, and a small set of key/value fields. Entries are immutable once
//! built; construction uses the builder pattern.

use super::level::LogLevel;
use core::fmt;
use core::panic::Location;
use smallvec::SmallVec;

/// Maximum number of fields in a log entry (to bound memory).
const MAX_FIELDS: usize = 8;

/// Source location captured at a combinator call site.
///
/// Used for diagnosis only, never for control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// Source file of the call site.
    pub file: &'static str,
    /// Line within the file.
    pub line: u32,
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A structured log entry with severity, message, and context.
#[derive(Debug, Clone)]
pub struct LogEntry {
    level: LogLevel,
    message: String,
    target: Option<&'static str>,
    location: Option<SourceLocation>,
    fields: SmallVec<[(&'static str, String); 4]>,
}

impl LogEntry {
    /// Creates a new entry with the given level and message.
    #[must_use]
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            target: None,
            location: None,
            fields: SmallVec::new(),
        }
    }

    /// Creates an INFO entry (retry notices).
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, message)
    }

    /// Creates a WARN entry (terminal failures).
    #[must_use]
    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Warn, message)
    }

    /// Sets the operation name the entry refers to.
    #[must_use]
    pub fn with_target(mut self, target: &'static str) -> Self {
        self.target = Some(target);
        self
    }

    /// Attaches a captured source location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<SourceLocation>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Adds a structured field. Fields beyond the fixed bound are dropped.
    #[must_use]
    pub fn with_field(mut self, key: &'static str, value: impl Into<String>) -> Self {
        if self.fields.len() < MAX_FIELDS {
            self.fields.push((key, value.into()));
        }
        self
    }

    /// Returns the severity level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the operation name, if set.
    #[must_use]
    pub const fn target(&self) -> Option<&'static str> {
        self.target
    }

    /// Returns the captured source location, if set.
    #[must_use]
    pub const fn location(&self) -> Option<SourceLocation> {
        self.location
    }

    /// Returns an iterator over the structured fields.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Looks up a single field by key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(target) = self.target {
            write!(f, " [{target}]")?;
        }
        write!(f, " {}", self.message)?;
        for (key, value) in self.fields() {
            write!(f, " {key}={value}")?;
        }
        if let Some(location) = self.location {
            write!(f, " at {location}")?;
        }
        Ok(())
    }
}
