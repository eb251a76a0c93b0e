//! Metadata record for an indexed source file
//!
//! The metadata artifact records:
//! - input_lines: number of lines in the source file (= index records)
//! - index_len: byte length of the index artifact
//! - input_len: byte length of the source file
//! - generated: RFC3339 timestamp of the build
//!
//! Location: `<dir>/<stem>_meta.json`, beside the source file.
//!
//! The record is written AFTER the index artifact is fully written and
//! flushed.

use serde::{Deserialize, Serialize};

use super::errors::{MetaError, MetaResult};

/// Metadata describing the index built for a source file.
///
/// All four fields are required on load; unknown fields are rejected.
/// The struct is an immutable value: the timestamp is an input, not
/// something the constructor computes, so builds are reproducible in
/// tests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileMeta {
    /// Number of lines in the source file
    pub input_lines: u64,

    /// Byte length of the index artifact
    pub index_len: u64,

    /// Byte length of the source file
    pub input_len: u64,

    /// Timestamp of the build (RFC3339 format)
    pub generated: String,
}

impl FileMeta {
    /// Creates a metadata record from the scan totals and a timestamp
    pub fn new(
        input_lines: u64,
        index_len: u64,
        input_len: u64,
        generated: impl Into<String>,
    ) -> Self {
        Self {
            input_lines,
            index_len,
            input_len,
            generated: generated.into(),
        }
    }

    /// Serializes the record to JSON
    pub fn to_json(&self) -> MetaResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            MetaError::write_failed_no_source(format!("Failed to serialize metadata: {}", e))
        })
    }

    /// Deserializes a record from JSON, validating the schema
    ///
    /// Any missing field, wrong type, or unknown field is corruption.
    pub fn from_json(json: &str) -> MetaResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| MetaError::corrupt(format!("Failed to parse metadata: {}", e)))
    }
}
