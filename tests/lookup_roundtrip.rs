//! Lookup round-trip tests
//!
//! Properties covered:
//! - Every row resolves to the same text a sequential scan yields
//! - The zero and line-count boundaries behave as defined
//! - Targets past the line count fail distinctly
//!
//! The defined line-count boundary: resolving the line count itself
//! reads at the one-past-the-end offset, which on a terminated file
//! yields an empty string, not an error.

mod common;

use rowseek::observability::Logger;
use rowseek::session::{Session, SessionError};
use tempfile::TempDir;

use common::{generate_lines, sample_file, write_lines};

// =============================================================================
// End-to-end scenarios on the five-line sample
// =============================================================================

#[test]
fn test_first_row_returns_first_line() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_file(temp_dir.path());

    let session = Session::open(&input, Logger::silent()).unwrap();
    assert_eq!(session.resolve(0).unwrap(), "nula");
}

#[test]
fn test_arbitrary_row_returns_its_line() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_file(temp_dir.path());

    let session = Session::open(&input, Logger::silent()).unwrap();
    assert_eq!(session.resolve(3).unwrap(), "tri");
}

#[test]
fn test_line_count_boundary_reads_empty_string() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_file(temp_dir.path());

    let session = Session::open(&input, Logger::silent()).unwrap();
    assert_eq!(session.metadata().input_lines, 5);
    assert_eq!(session.resolve(5).unwrap(), "");
}

#[test]
fn test_target_past_line_count_is_out_of_range() {
    let temp_dir = TempDir::new().unwrap();
    let input = sample_file(temp_dir.path());

    let session = Session::open(&input, Logger::silent()).unwrap();
    let err = session.resolve(10).unwrap_err();

    assert!(err.to_string().contains("ROWSEEK_INDEX_OUT_OF_RANGE"));
    assert!(!err.is_fatal());
}

#[test]
fn test_missing_input_file_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let absent = temp_dir.path().join("absent.txt");

    let err = Session::open(&absent, Logger::silent()).unwrap_err();
    assert!(matches!(err, SessionError::NotFound(_)));
}

// =============================================================================
// Round-trip against a sequential scan
// =============================================================================

#[test]
fn test_roundtrip_matches_sequential_scan() {
    let temp_dir = TempDir::new().unwrap();
    let lines = generate_lines(500, 42);
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let input = write_lines(temp_dir.path(), "generated.txt", &refs);

    let session = Session::open(&input, Logger::silent()).unwrap();

    // The sequential scan is the ground truth
    for (row, expected) in lines.iter().enumerate() {
        assert_eq!(
            session.resolve(row as u64).unwrap(),
            *expected,
            "row {}",
            row
        );
    }
}

#[test]
fn test_roundtrip_out_of_order_targets() {
    let temp_dir = TempDir::new().unwrap();
    let lines = generate_lines(100, 7);
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let input = write_lines(temp_dir.path(), "generated.txt", &refs);

    let session = Session::open(&input, Logger::silent()).unwrap();

    for row in [99u64, 0, 50, 1, 98, 33, 0] {
        assert_eq!(session.resolve(row).unwrap(), lines[row as usize], "row {}", row);
    }
}

// =============================================================================
// Degenerate inputs
// =============================================================================

#[test]
fn test_single_line_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_lines(temp_dir.path(), "one.txt", &["solo"]);

    let session = Session::open(&input, Logger::silent()).unwrap();
    assert_eq!(session.resolve(0).unwrap(), "solo");
    assert_eq!(session.resolve(1).unwrap(), "");
    assert!(session.resolve(2).is_err());
}

#[test]
fn test_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_lines(temp_dir.path(), "empty.txt", &[]);

    let session = Session::open(&input, Logger::silent()).unwrap();
    assert_eq!(session.metadata().input_lines, 0);
    assert_eq!(session.resolve(0).unwrap(), "");

    let err = session.resolve(1).unwrap_err();
    assert!(err.to_string().contains("ROWSEEK_INDEX_OUT_OF_RANGE"));
}

#[test]
fn test_file_with_empty_lines() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_lines(temp_dir.path(), "gaps.txt", &["a", "", "", "b", ""]);

    let session = Session::open(&input, Logger::silent()).unwrap();
    assert_eq!(session.resolve(0).unwrap(), "a");
    assert_eq!(session.resolve(1).unwrap(), "");
    assert_eq!(session.resolve(2).unwrap(), "");
    assert_eq!(session.resolve(3).unwrap(), "b");
    assert_eq!(session.resolve(4).unwrap(), "");
}
