//! Metadata store: load and save of the metadata sidecar
//!
//! The artifact path is derived deterministically from the source
//! path: same directory, same stem, `_meta.json` suffix. A missing
//! artifact is the expected cache-miss signal and is reported as
//! `MetaLookup::Missing`, not as an error; callers branch on it to
//! trigger a rebuild.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::errors::{MetaError, MetaResult};
use super::record::FileMeta;

/// Filename suffix of the metadata artifact
pub const META_SUFFIX: &str = "_meta.json";

/// Outcome of a metadata lookup
///
/// `Missing` is the one expected, locally handled condition: the
/// artifact has not been built yet.
#[derive(Debug)]
pub enum MetaLookup {
    /// A valid artifact was found and parsed
    Found(FileMeta),
    /// No artifact exists at the derived path
    Missing,
}

/// Returns the metadata artifact path for a source file
pub fn meta_path(input_path: &Path) -> PathBuf {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input_path.with_file_name(format!("{}{}", stem, META_SUFFIX))
}

/// Loads the metadata artifact for a source file.
///
/// # Returns
///
/// - `Ok(MetaLookup::Found(meta))` if a valid artifact was parsed
/// - `Ok(MetaLookup::Missing)` if no artifact exists
/// - `Err(ROWSEEK_META_CORRUPT)` if the artifact exists but fails
///   schema validation (FATAL)
/// - `Err(ROWSEEK_META_READ_FAILED)` on any other read failure
pub fn load(input_path: &Path) -> MetaResult<MetaLookup> {
    let path = meta_path(input_path);

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(MetaLookup::Missing),
        Err(e) => {
            return Err(MetaError::read_failed(
                format!("Failed to read metadata artifact: {}", path.display()),
                e,
            ))
        }
    };

    FileMeta::from_json(&contents)
        .map(MetaLookup::Found)
        .map_err(|e| MetaError::corrupt_at_path(path.display().to_string(), e.message()))
}

/// Saves a metadata record to the sidecar path, overwriting any
/// existing artifact.
///
/// The write is not crash-safe: a crash mid-write leaves a corrupt
/// artifact recoverable only by deletion and rebuild.
pub fn save(meta: &FileMeta, input_path: &Path) -> MetaResult<()> {
    let path = meta_path(input_path);
    let json = meta.to_json()?;

    fs::write(&path, json).map_err(|e| {
        MetaError::write_failed(
            format!("Failed to write metadata artifact: {}", path.display()),
            e,
        )
    })
}
