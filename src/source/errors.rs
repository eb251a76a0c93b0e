//! Source read error types
//!
//! Error codes:
//! - ROWSEEK_SOURCE_READ_FAILED (ERROR severity)
//! - ROWSEEK_SOURCE_OFFSET_BEYOND_EOF (ERROR severity)

use std::fmt;
use std::io;

/// Severity levels for source errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation fails, caller may continue
    Error,
    /// Unrecoverable
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

/// Source-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorCode {
    /// Opening or reading the source file failed
    ReadFailed,
    /// A resolved offset points past the end of the source file
    OffsetBeyondEof,
}

impl SourceErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SourceErrorCode::ReadFailed => "ROWSEEK_SOURCE_READ_FAILED",
            SourceErrorCode::OffsetBeyondEof => "ROWSEEK_SOURCE_OFFSET_BEYOND_EOF",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            SourceErrorCode::ReadFailed => Severity::Error,
            SourceErrorCode::OffsetBeyondEof => Severity::Error,
        }
    }
}

impl fmt::Display for SourceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Source error type
#[derive(Debug)]
pub struct SourceError {
    code: SourceErrorCode,
    message: String,
    source: Option<io::Error>,
}

impl SourceError {
    /// Create a new read error
    pub fn read_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: SourceErrorCode::ReadFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a read error without IO source
    pub fn read_failed_no_source(message: impl Into<String>) -> Self {
        Self {
            code: SourceErrorCode::ReadFailed,
            message: message.into(),
            source: None,
        }
    }

    /// Create an offset-beyond-eof error
    pub fn offset_beyond_eof(offset: u64, file_len: u64) -> Self {
        Self {
            code: SourceErrorCode::OffsetBeyondEof,
            message: format!(
                "Resolved offset {} is beyond end of source file ({} bytes)",
                offset, file_len
            ),
            source: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SourceErrorCode {
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

    /// Returns whether this error is fatal
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SourceErrorCode::ReadFailed.code(), "ROWSEEK_SOURCE_READ_FAILED");
        assert_eq!(
            SourceErrorCode::OffsetBeyondEof.code(),
            "ROWSEEK_SOURCE_OFFSET_BEYOND_EOF"
        );
    }

    #[test]
    fn test_offset_beyond_eof_message() {
        let err = SourceError::offset_beyond_eof(100, 23);
        assert!(err.to_string().contains("100"));
        assert!(err.to_string().contains("23"));
        assert!(!err.is_fatal());
    }
}
