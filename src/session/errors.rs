//! Session-level error type
//!
//! Wraps the subsystem errors behind one surface for callers. The only
//! condition handled inside the session rather than surfaced is the
//! metadata cache miss, which is not an error at all
//! (`MetaLookup::Missing`).

use std::path::PathBuf;

use thiserror::Error;

use crate::index::IndexError;
use crate::meta::MetaError;
use crate::source::SourceError;

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors surfaced by a lookup session
#[derive(Debug, Error)]
pub enum SessionError {
    /// The source file path does not exist
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Metadata artifact errors (corrupt or unreadable sidecar)
    #[error(transparent)]
    Meta(#[from] MetaError),

    /// Index build and lookup errors
    #[error(transparent)]
    Index(#[from] IndexError),

    /// Source file read errors
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl SessionError {
    /// Returns whether the underlying error is fatal (a persisted
    /// artifact is unusable without deletion and rebuild)
    pub fn is_fatal(&self) -> bool {
        match self {
            SessionError::NotFound(_) => false,
            SessionError::Meta(e) => e.is_fatal(),
            SessionError::Index(e) => e.is_fatal(),
            SessionError::Source(e) => e.is_fatal(),
        }
    }
}
