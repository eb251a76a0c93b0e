//! Sparse line-index subsystem for rowseek
//!
//! The index artifact maps row numbers to byte offsets in the source
//! file: one text record `"<row>,<byte_offset>\n"` per line, in row
//! order, with no header, footer, or checksum.
//!
//! # Design Principles
//!
//! - Built in a single forward pass over the source (O(total bytes),
//!   O(1) memory beyond line buffering)
//! - Records are variable-length text, so lookups binary-search over
//!   byte positions of the artifact rather than record numbers
//! - The artifact is fully written and flushed before the metadata
//!   that describes it
//!
//! # Invariants Enforced
//!
//! - Rows are strictly increasing from 0 with no gaps
//! - Byte offsets are non-decreasing with row
//! - The first record always has byte offset 0
//! - A mid-range target the search cannot resolve is a fatal
//!   invariant violation, never a silent miss

mod builder;
mod errors;
mod locator;

pub use builder::{build_index, index_path, IndexSummary, INDEX_SUFFIX};
pub use errors::{IndexError, IndexErrorCode, IndexResult};
pub use locator::find_offset;
