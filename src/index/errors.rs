//! Index error types
//!
//! Error codes:
//! - ROWSEEK_INDEX_OUT_OF_RANGE (ERROR severity)
//! - ROWSEEK_INDEX_READ_FAILED (ERROR severity)
//! - ROWSEEK_INDEX_WRITE_FAILED (ERROR severity)
//! - ROWSEEK_INDEX_MALFORMED (FATAL severity)
//! - ROWSEEK_INDEX_UNRESOLVED (FATAL severity)
//!
//! UNRESOLVED marks a search that exhausted its window without finding
//! a mid-range target. A correctly built index cannot produce it; its
//! appearance means the artifact no longer covers every row.

use std::fmt;
use std::io;

/// Severity levels for index errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation fails, caller may continue
    Error,
    /// Unrecoverable without deleting and rebuilding the artifact
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Index-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexErrorCode {
    /// Target row exceeds the known line count
    OutOfRange,
    /// Reading the index or source failed during build or lookup
    ReadFailed,
    /// Writing the index artifact failed
    WriteFailed,
    /// An index record does not parse as `<row>,<offset>`
    Malformed,
    /// The binary search exhausted its window without a match
    Unresolved,
}

impl IndexErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            IndexErrorCode::OutOfRange => "ROWSEEK_INDEX_OUT_OF_RANGE",
            IndexErrorCode::ReadFailed => "ROWSEEK_INDEX_READ_FAILED",
            IndexErrorCode::WriteFailed => "ROWSEEK_INDEX_WRITE_FAILED",
            IndexErrorCode::Malformed => "ROWSEEK_INDEX_MALFORMED",
            IndexErrorCode::Unresolved => "ROWSEEK_INDEX_UNRESOLVED",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            IndexErrorCode::OutOfRange => Severity::Error,
            IndexErrorCode::ReadFailed => Severity::Error,
            IndexErrorCode::WriteFailed => Severity::Error,
            IndexErrorCode::Malformed => Severity::Fatal,
            IndexErrorCode::Unresolved => Severity::Fatal,
        }
    }
}

impl fmt::Display for IndexErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Index error type with full context
#[derive(Debug)]
pub struct IndexError {
    /// Error code
    code: IndexErrorCode,
    /// Human-readable message
    message: String,
    /// Optional details about the error context
    details: Option<String>,
    /// Underlying IO error if applicable
    source: Option<io::Error>,
}

impl IndexError {
    /// Create an out-of-range error for a target past the line count
    pub fn out_of_range(target: u64, input_lines: u64) -> Self {
        Self {
            code: IndexErrorCode::OutOfRange,
            message: format!(
                "Target row {} is bigger than the number of input lines: {}",
                target, input_lines
            ),
            details: None,
            source: None,
        }
    }

    /// Create a new read error
    pub fn read_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: IndexErrorCode::ReadFailed,
            message: message.into(),
            details: None,
            source: Some(source),
        }
    }

    /// Create a new write error
    pub fn write_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: IndexErrorCode::WriteFailed,
            message: message.into(),
            details: None,
            source: Some(source),
        }
    }

    /// Create a malformed-record error (FATAL)
    pub fn malformed(record: &str) -> Self {
        Self {
            code: IndexErrorCode::Malformed,
            message: "Index record does not parse as <row>,<offset>".to_string(),
            details: Some(format!("record: {:?}", record)),
            source: None,
        }
    }

    /// Create an unresolved-search error (FATAL)
    ///
    /// Only reachable when the index violates the contiguous-rows
    /// invariant for a target strictly between the O(1) boundaries.
    pub fn unresolved(target: u64) -> Self {
        Self {
            code: IndexErrorCode::Unresolved,
            message: format!(
                "Binary search exhausted without resolving row {}; the index does not cover every row",
                target
            ),
            details: None,
            source: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> IndexErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns additional error details
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Returns whether this error is fatal
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for IndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for index operations
pub type IndexResult<T> = Result<T, IndexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(IndexErrorCode::OutOfRange.code(), "ROWSEEK_INDEX_OUT_OF_RANGE");
        assert_eq!(IndexErrorCode::ReadFailed.code(), "ROWSEEK_INDEX_READ_FAILED");
        assert_eq!(IndexErrorCode::WriteFailed.code(), "ROWSEEK_INDEX_WRITE_FAILED");
        assert_eq!(IndexErrorCode::Malformed.code(), "ROWSEEK_INDEX_MALFORMED");
        assert_eq!(IndexErrorCode::Unresolved.code(), "ROWSEEK_INDEX_UNRESOLVED");
    }

    #[test]
    fn test_out_of_range_not_fatal() {
        let err = IndexError::out_of_range(10, 5);
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("5"));
    }

    #[test]
    fn test_unresolved_is_fatal() {
        let err = IndexError::unresolved(3);
        assert!(err.is_fatal());
        assert_eq!(err.code().code(), "ROWSEEK_INDEX_UNRESOLVED");
    }

    #[test]
    fn test_malformed_is_fatal() {
        let err = IndexError::malformed("garbage");
        assert!(err.is_fatal());
        assert!(err.to_string().contains("garbage"));
    }
}
