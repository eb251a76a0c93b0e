//! Locator: resolves a target row to a source byte offset
//!
//! Index records are variable-length text, so there is no O(1) way to
//! seek to "the k-th record". The general case binary-searches over
//! byte positions of the index artifact instead: each probe seeks into
//! the artifact, discards the partial record it landed in, parses the
//! next full record and compares its row to the target. O(log
//! index_len) seeks, each reading at most two records.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

use crate::meta::FileMeta;

use super::errors::{IndexError, IndexResult};

/// One parsed index record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IndexRecord {
    row: u64,
    offset: u64,
}

/// Resolves `target` to the byte offset where that row begins.
///
/// Boundary cases resolve in constant time without a search:
/// - `target == 0`: the offset stored in the index's first record
/// - `target == input_lines`: the one-past-the-end boundary offset,
///   i.e. the byte length of the source file
/// - `target > input_lines`: `OutOfRange`
///
/// # Errors
///
/// - `ROWSEEK_INDEX_OUT_OF_RANGE` when the target exceeds the line count
/// - `ROWSEEK_INDEX_MALFORMED` when a probed record does not parse
/// - `ROWSEEK_INDEX_UNRESOLVED` when the search exhausts its window
///   without a match, which cannot happen for a correctly built index
pub fn find_offset(target: u64, meta: &FileMeta, index_path: &Path) -> IndexResult<u64> {
    if target > meta.input_lines {
        return Err(IndexError::out_of_range(target, meta.input_lines));
    }

    let index = File::open(index_path).map_err(|e| {
        IndexError::read_failed(
            format!("Failed to open index artifact: {}", index_path.display()),
            e,
        )
    })?;
    let mut reader = BufReader::new(index);

    if target == 0 {
        // The first record is read directly; no search.
        return match read_record(&mut reader)? {
            Some(record) => Ok(record.offset),
            // Empty index: only an empty source produces one, and then
            // the boundary offset below is the answer (zero).
            None => Ok(meta.input_len),
        };
    }

    if target == meta.input_lines {
        // One past the last row: the running offset after the final
        // line, recorded in the metadata as the source byte length.
        return Ok(meta.input_len);
    }

    let mut low: u64 = 0;
    let mut high: u64 = meta.index_len;

    while low <= high {
        let mid = (low + high) / 2;

        reader.seek(SeekFrom::Start(mid)).map_err(|e| {
            IndexError::read_failed(format!("Failed to seek index to byte {}", mid), e)
        })?;

        // The probe usually lands inside a record; drop the remainder
        // to align on the start of the next full record.
        skip_partial_record(&mut reader)?;

        match read_record(&mut reader)? {
            Some(record) => {
                if record.row == target {
                    return Ok(record.offset);
                }
                if target < record.row {
                    match mid.checked_sub(1) {
                        Some(h) => high = h,
                        None => break,
                    }
                } else {
                    low = mid + 1;
                }
            }
            // The probe landed inside the final record, so the next
            // full record would start past end-of-index. Every row
            // recorded at or after this position exceeds the target.
            None => match mid.checked_sub(1) {
                Some(h) => high = h,
                None => break,
            },
        }
    }

    Err(IndexError::unresolved(target))
}

/// Reads and discards bytes up to and including the next terminator
fn skip_partial_record<R: BufRead>(reader: &mut R) -> IndexResult<()> {
    let mut discard = Vec::new();
    reader
        .read_until(b'\n', &mut discard)
        .map_err(|e| IndexError::read_failed("Failed to skip partial index record", e))?;
    Ok(())
}

/// Reads one full record, or `None` at end-of-index
fn read_record<R: BufRead>(reader: &mut R) -> IndexResult<Option<IndexRecord>> {
    let mut buf = Vec::new();
    let n = reader
        .read_until(b'\n', &mut buf)
        .map_err(|e| IndexError::read_failed("Failed to read index record", e))?;
    if n == 0 {
        return Ok(None);
    }

    let text = std::str::from_utf8(&buf)
        .map_err(|_| IndexError::malformed("<non-utf8 bytes>"))?
        .trim_end_matches('\n');

    let (row, offset) = text
        .split_once(',')
        .ok_or_else(|| IndexError::malformed(text))?;

    let row = row
        .parse::<u64>()
        .map_err(|_| IndexError::malformed(text))?;
    let offset = offset
        .parse::<u64>()
        .map_err(|_| IndexError::malformed(text))?;

    Ok(Some(IndexRecord { row, offset }))
}
