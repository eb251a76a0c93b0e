//! Metadata sidecar subsystem for rowseek
//!
//! The metadata artifact is a small JSON record written beside the
//! source file, summarizing the index built for it.
//!
//! # Design Principles
//!
//! - One artifact per source file, at a path derived from the source path
//! - Written once, fully, after the index artifact is complete
//! - Loaded without validation against the current source content
//!   (staleness is the caller's responsibility)
//!
//! # Invariants Enforced
//!
//! - `input_lines` equals the number of index records
//! - `index_len` equals the byte length of the index artifact
//! - A present-but-unparseable artifact is a fatal corruption error,
//!   never a silent rebuild

mod errors;
mod record;
mod store;

pub use errors::{MetaError, MetaErrorCode, MetaResult};
pub use record::FileMeta;
pub use store::{load, meta_path, save, MetaLookup, META_SUFFIX};
