//! Retriever: reads the single line at a resolved byte offset
//!
//! An offset equal to the file length is the one-past-the-end boundary
//! and reads as an empty string; an offset beyond it means the index
//! and source disagree, which is an error.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

use super::errors::{SourceError, SourceResult};

/// Seeks the source file to `offset` and reads one line, without its
/// trailing terminator.
pub fn read_line_at(source_path: &Path, offset: u64) -> SourceResult<String> {
    let file = File::open(source_path).map_err(|e| {
        SourceError::read_failed(
            format!("Failed to open source file: {}", source_path.display()),
            e,
        )
    })?;

    let file_len = file
        .metadata()
        .map_err(|e| SourceError::read_failed("Failed to read source file metadata", e))?
        .len();
    if offset > file_len {
        return Err(SourceError::offset_beyond_eof(offset, file_len));
    }

    let mut reader = BufReader::new(file);
    reader.seek(SeekFrom::Start(offset)).map_err(|e| {
        SourceError::read_failed(format!("Failed to seek source to byte {}", offset), e)
    })?;

    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf).map_err(|e| {
        SourceError::read_failed(format!("Failed to read line at byte {}", offset), e)
    })?;

    if buf.last() == Some(&b'\n') {
        buf.pop();
    }

    String::from_utf8(buf).map_err(|_| {
        SourceError::read_failed_no_source(format!(
            "Line at byte {} is not valid UTF-8",
            offset
        ))
    })
}
