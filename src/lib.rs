//! rowseek - random-access row retrieval from large line-oriented text files
//!
//! A source file is scanned once into a persisted sparse index of
//! `(row, byte_offset)` records plus a small metadata sidecar; later
//! lookups resolve a row to a byte offset with a binary search over the
//! index artifact and read exactly one line from the source.

pub mod bounds;
pub mod cache;
pub mod cli;
pub mod index;
pub mod meta;
pub mod observability;
pub mod session;
pub mod source;
