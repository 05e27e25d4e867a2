//! Corruption specs
//!
//! Malformed on-disk entries abort reads with a distinct error.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn missing_field_is_detected_by_read_and_latest() {
    let dir = WalDir::new();
    let valid = stages()[0].to_line();
    dir.write_raw("partition-2", &format!("{valid}\n{{\"commit_id\": \"bad\"}}\n"));
    let wal = dir.open();

    let read_err = wal.read_range("partition-2", 0, None).unwrap_err();
    let latest_err = wal.get_latest_sequence("partition-2").unwrap_err();

    assert!(read_err.is_malformed(), "{read_err}");
    assert!(latest_err.is_malformed(), "{latest_err}");
}

#[test]
fn read_is_all_or_nothing() {
    let dir = WalDir::new();
    let lines: Vec<String> = stages().iter().map(CommitRecord::to_line).collect();
    dir.write_raw(
        "p",
        &format!("{}\n{}\n{{not json\n{}\n", lines[0], lines[1], lines[2]),
    );
    let wal = dir.open();

    assert!(wal.read_range("p", 0, None).unwrap_err().is_malformed());
    // Ranges that stop before the damage still succeed
    assert_eq!(wal.read_range("p", 0, Some(2)).unwrap(), stages()[..2].to_vec());
    // The tail is intact, so recovery of the tip still works
    assert_eq!(wal.get_latest_sequence("p").unwrap(), 12);
}

#[test]
fn hand_edited_file_with_blank_lines_is_accepted() {
    let dir = WalDir::new();
    let lines: Vec<String> = stages().iter().map(CommitRecord::to_line).collect();
    dir.write_raw("p", &format!("{}\n\n{}\n{}\n\n\n", lines[0], lines[1], lines[2]));
    let wal = dir.open();

    assert_eq!(wal.read_range("p", 0, None).unwrap(), stages());
    assert_eq!(wal.get_latest_sequence("p").unwrap(), 12);
}

#[test]
fn malformed_error_is_distinct_from_io_error() {
    let dir = WalDir::new();
    dir.write_raw("p", "[]\n");

    let err = dir.open().get_latest_sequence("p").unwrap_err();

    assert!(matches!(err, WalError::Malformed { .. }));
}
