//! CLI-specific error types

use std::fmt;
use std::io;

use crate::session::SessionError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Clearing cached artifacts failed
    CacheClearFailed,
    /// The lookup itself failed
    LookupFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::CacheClearFailed => "ROWSEEK_CLI_CACHE_CLEAR_FAILED",
            Self::LookupFailed => "ROWSEEK_CLI_LOOKUP_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Cache clear failure
    pub fn cache_clear_failed(source: io::Error) -> Self {
        Self::new(
            CliErrorCode::CacheClearFailed,
            format!("Failed to clear cached artifacts: {}", source),
        )
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<SessionError> for CliError {
    fn from(e: SessionError) -> Self {
        Self::new(CliErrorCode::LookupFailed, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::cache_clear_failed(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let display = err.to_string();
        assert!(display.contains("ROWSEEK_CLI_CACHE_CLEAR_FAILED"));
        assert!(display.contains("denied"));
    }

    #[test]
    fn test_session_error_keeps_inner_code() {
        let inner = SessionError::NotFound(PathBuf::from("/data/absent.txt"));
        let err = CliError::from(inner);
        assert_eq!(err.code(), &CliErrorCode::LookupFailed);
        assert!(err.message().contains("/data/absent.txt"));
    }
}
