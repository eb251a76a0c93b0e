//! Index builder: one forward pass over the source file
//!
//! For each source line the builder emits one record
//! `"<row>,<byte_offset>\n"` to the index artifact and advances the
//! running offset by the line's byte length, terminator included. The
//! artifact is flushed before the scan totals are returned, so the
//! metadata written from them never describes a partially written
//! index.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::observability::Logger;

use super::errors::{IndexError, IndexResult};

/// Filename suffix of the index artifact
pub const INDEX_SUFFIX: &str = "_index.idx";

/// Totals produced by a full index build.
///
/// `input_lines` is the number of records written, `index_len` the
/// byte length of the index artifact, `input_len` the byte length of
/// the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSummary {
    /// Number of lines scanned (= index records written)
    pub input_lines: u64,
    /// Byte length of the index artifact
    pub index_len: u64,
    /// Byte length of the source file
    pub input_len: u64,
}

/// Returns the index artifact path for a source file
pub fn index_path(input_path: &Path) -> PathBuf {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input_path.with_file_name(format!("{}{}", stem, INDEX_SUFFIX))
}

/// Scans the source file and writes the index artifact.
///
/// Overwrites any existing artifact. Lines are read as raw bytes, so
/// offsets are byte offsets regardless of encoding.
pub fn build_index(input_path: &Path, logger: &Logger) -> IndexResult<IndexSummary> {
    let out_path = index_path(input_path);
    logger.info(
        "INDEX_BUILD_BEGIN",
        &[
            ("input", &input_path.display().to_string()),
            ("index", &out_path.display().to_string()),
        ],
    );

    let input = File::open(input_path).map_err(|e| {
        IndexError::read_failed(
            format!("Failed to open source file: {}", input_path.display()),
            e,
        )
    })?;
    let mut reader = BufReader::new(input);

    let out = File::create(&out_path).map_err(|e| {
        IndexError::write_failed(
            format!("Failed to create index artifact: {}", out_path.display()),
            e,
        )
    })?;
    let mut writer = BufWriter::new(out);

    let mut input_lines: u64 = 0;
    let mut offset: u64 = 0;
    let mut index_len: u64 = 0;
    let mut buf = Vec::with_capacity(1024);

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).map_err(|e| {
            IndexError::read_failed(
                format!("Failed to read source line {}", input_lines),
                e,
            )
        })?;
        if n == 0 {
            break;
        }

        let record = format!("{},{}\n", input_lines, offset);
        writer.write_all(record.as_bytes()).map_err(|e| {
            IndexError::write_failed(
                format!("Failed to write index record for row {}", input_lines),
                e,
            )
        })?;

        index_len += record.len() as u64;
        offset += n as u64;
        input_lines += 1;
    }

    writer.flush().map_err(|e| {
        IndexError::write_failed(
            format!("Failed to flush index artifact: {}", out_path.display()),
            e,
        )
    })?;

    logger.info(
        "INDEX_BUILD_COMPLETE",
        &[
            ("index_bytes", &index_len.to_string()),
            ("input_bytes", &offset.to_string()),
            ("lines", &input_lines.to_string()),
        ],
    );

    Ok(IndexSummary {
        input_lines,
        index_len,
        input_len: offset,
    })
}
