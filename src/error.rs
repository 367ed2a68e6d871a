//! Host error type raised by dispatch and the host shim.

use std::fmt;

/// Categories of host errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No arity entry accepts the supplied argument count
    ArityMismatch { count: usize },
    /// Regular expression failed to compile or carried unknown flags
    InvalidPattern,
    /// Timestamp or calendar fields outside the representable range
    InvalidDate,
    /// An entry received a value of the wrong variant
    TypeMismatch,
}

/// A failure value carrying a single human-readable message.
///
/// `Display` renders the message and nothing else, so callers can match
/// on its textual shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostError {
    /// The category of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl HostError {
    /// Create a new host error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create an arity mismatch error for `count` arguments.
    pub fn invalid_arity(count: usize) -> Self {
        Self::new(
            ErrorKind::ArityMismatch { count },
            format!("Invalid arity: {count}"),
        )
    }

    /// Create an invalid pattern error.
    pub fn invalid_pattern(source: &str, reason: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::InvalidPattern,
            format!("Invalid regular expression: /{source}/: {reason}"),
        )
    }

    /// Create an invalid date error.
    pub fn invalid_date(what: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDate, what)
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(expected: &str, got: &str) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("Expected {expected}, got {got}"),
        )
    }

    /// The rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HostError {}

impl From<HostError> for String {
    fn from(err: HostError) -> String {
        err.message
    }
}
