//! Structured logging for rowseek
//!
//! - Structured logs (JSON), one line per event
//! - Deterministic key ordering
//! - Explicit severity levels
//! - Synchronous, no buffering
//!
//! The logger is an explicit handle passed into constructors; there is
//! no process-wide logger state.

mod logger;

pub use logger::{Logger, Severity};
