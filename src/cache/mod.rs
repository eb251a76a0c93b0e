//! Sidecar cache clearing
//!
//! Removes every index and metadata artifact in a directory, matched
//! by filename suffix, forcing the next session against any source
//! file there to rebuild from scratch.

use std::fs;
use std::io;
use std::path::Path;

use crate::index::INDEX_SUFFIX;
use crate::meta::META_SUFFIX;
use crate::observability::Logger;

/// Deletes all index and metadata artifacts in `directory`.
///
/// Only files whose names end in the artifact suffixes are touched.
/// Returns the number of files removed.
pub fn clear_artifacts(directory: &Path, logger: &Logger) -> io::Result<usize> {
    logger.info(
        "CACHE_CLEAR_BEGIN",
        &[("directory", &directory.display().to_string())],
    );

    let mut removed = 0;
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if name.ends_with(INDEX_SUFFIX) || name.ends_with(META_SUFFIX) {
            fs::remove_file(entry.path())?;
            removed += 1;
        }
    }

    logger.info("CACHE_CLEAR_COMPLETE", &[("removed", &removed.to_string())]);

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clear_removes_only_artifacts() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();

        fs::write(dir.join("sample.txt"), "data\n").unwrap();
        fs::write(dir.join("sample_index.idx"), "0,0\n").unwrap();
        fs::write(dir.join("sample_meta.json"), "{}").unwrap();
        fs::write(dir.join("other_index.idx"), "0,0\n").unwrap();

        let removed = clear_artifacts(dir, &Logger::silent()).unwrap();

        assert_eq!(removed, 3);
        assert!(dir.join("sample.txt").exists());
        assert!(!dir.join("sample_index.idx").exists());
        assert!(!dir.join("sample_meta.json").exists());
        assert!(!dir.join("other_index.idx").exists());
    }

    #[test]
    fn test_clear_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let removed = clear_artifacts(temp_dir.path(), &Logger::silent()).unwrap();
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_clear_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let absent = temp_dir.path().join("absent");

        assert!(clear_artifacts(&absent, &Logger::silent()).is_err());
    }
}
