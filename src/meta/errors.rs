//! Metadata error types
//!
//! Error codes:
//! - ROWSEEK_META_READ_FAILED (ERROR severity)
//! - ROWSEEK_META_WRITE_FAILED (ERROR severity)
//! - ROWSEEK_META_CORRUPT (FATAL severity)
//!
//! An absent metadata artifact is not an error; the store reports it
//! as `MetaLookup::Missing` so the rebuild branch is ordinary control
//! flow.

use std::fmt;
use std::io;

/// Severity levels for metadata errors
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

/// Metadata-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaErrorCode {
    /// Reading the metadata artifact failed
    MetaReadFailed,
    /// Writing the metadata artifact failed
    MetaWriteFailed,
    /// The artifact exists but does not parse into the required fields
    MetaCorrupt,
}

impl MetaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            MetaErrorCode::MetaReadFailed => "ROWSEEK_META_READ_FAILED",
            MetaErrorCode::MetaWriteFailed => "ROWSEEK_META_WRITE_FAILED",
            MetaErrorCode::MetaCorrupt => "ROWSEEK_META_CORRUPT",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            MetaErrorCode::MetaReadFailed => Severity::Error,
            MetaErrorCode::MetaWriteFailed => Severity::Error,
            MetaErrorCode::MetaCorrupt => Severity::Fatal,
        }
    }
}

impl fmt::Display for MetaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Metadata error type with full context
#[derive(Debug)]
pub struct MetaError {
    /// Error code
    code: MetaErrorCode,
    /// Human-readable message
    message: String,
    /// Optional details about the error context
    details: Option<String>,
    /// Underlying IO error if applicable
    source: Option<io::Error>,
}

impl MetaError {
    /// Create a new metadata read error
    pub fn read_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: MetaErrorCode::MetaReadFailed,
            message: message.into(),
            details: None,
            source: Some(source),
        }
    }

    /// Create a new metadata write error
    pub fn write_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: MetaErrorCode::MetaWriteFailed,
            message: message.into(),
            details: None,
            source: Some(source),
        }
    }

    /// Create a metadata write error without IO source
    pub fn write_failed_no_source(message: impl Into<String>) -> Self {
        Self {
            code: MetaErrorCode::MetaWriteFailed,
            message: message.into(),
            details: None,
            source: None,
        }
    }

    /// Create a new corruption error (FATAL)
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self {
            code: MetaErrorCode::MetaCorrupt,
            message: message.into(),
            details: None,
            source: None,
        }
    }

    /// Create a corruption error with artifact path context
    pub fn corrupt_at_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: MetaErrorCode::MetaCorrupt,
            message: reason.into(),
            details: Some(format!("artifact: {}", path.into())),
            source: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> MetaErrorCode {
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

impl fmt::Display for MetaError {
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

impl std::error::Error for MetaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for metadata operations
pub type MetaResult<T> = Result<T, MetaError>;
