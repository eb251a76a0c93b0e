//! Lookup session: the orchestrator tying the subsystems together
//!
//! A session is opened against one source file. Construction validates
//! the path, then loads the metadata sidecar; on a cache miss it
//! builds the index and persists fresh metadata before any lookup
//! runs. `resolve` composes the locator and the retriever and may be
//! called repeatedly with different targets against the same loaded
//! metadata.

mod errors;

pub use errors::{SessionError, SessionResult};

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::index::{build_index, find_offset, index_path};
use crate::meta::{self, FileMeta, MetaLookup};
use crate::observability::Logger;
use crate::source::read_line_at;

/// A lookup session over one source file and its sidecar artifacts.
///
/// Metadata is loaded (or built) once at construction and never
/// revalidated against the source afterwards; staleness is the
/// caller's responsibility.
#[derive(Debug)]
pub struct Session {
    input_path: PathBuf,
    index_path: PathBuf,
    meta: FileMeta,
    logger: Logger,
}

impl Session {
    /// Opens a session, loading cached metadata or building the index
    /// on a cache miss.
    ///
    /// # Errors
    ///
    /// - `SessionError::NotFound` if the source path does not exist
    /// - metadata corruption and index build failures propagate
    pub fn open(input_path: impl Into<PathBuf>, logger: Logger) -> SessionResult<Self> {
        let input_path = input_path.into();
        if !input_path.exists() {
            return Err(SessionError::NotFound(input_path));
        }

        let meta = match meta::load(&input_path)? {
            MetaLookup::Found(meta) => {
                logger.info(
                    "META_CACHE_HIT",
                    &[
                        ("input", &input_path.display().to_string()),
                        ("lines", &meta.input_lines.to_string()),
                    ],
                );
                meta
            }
            MetaLookup::Missing => {
                logger.info(
                    "META_CACHE_MISS",
                    &[("input", &input_path.display().to_string())],
                );
                let summary = build_index(&input_path, &logger)?;
                let meta = FileMeta::new(
                    summary.input_lines,
                    summary.index_len,
                    summary.input_len,
                    Utc::now().to_rfc3339(),
                );
                meta::save(&meta, &input_path)?;
                meta
            }
        };

        Ok(Self {
            index_path: index_path(&input_path),
            input_path,
            meta,
            logger,
        })
    }

    /// Resolves a target row to its line text.
    ///
    /// Idempotent: no session state changes, so repeated calls with
    /// any mix of targets reuse the loaded metadata and index.
    pub fn resolve(&self, target: u64) -> SessionResult<String> {
        self.logger.info(
            "ROW_LOOKUP",
            &[
                ("input", &self.input_path.display().to_string()),
                ("target", &target.to_string()),
            ],
        );

        let offset = find_offset(target, &self.meta, &self.index_path)?;
        let line = read_line_at(&self.input_path, offset)?;
        Ok(line)
    }

    /// Returns the loaded metadata
    pub fn metadata(&self) -> &FileMeta {
        &self.meta
    }

    /// Returns the source file path
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }
}
