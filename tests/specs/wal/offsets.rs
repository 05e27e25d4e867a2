//! Offset specs
//!
//! `read_range(a, b)` returns exactly offsets `[a, b)`.

use crate::prelude::*;
use similar_asserts::assert_eq;

fn filled(count: u64) -> (WalDir, Vec<CommitRecord>) {
    let dir = WalDir::new();
    let mut wal = dir.open();
    let records: Vec<_> = (0..count)
        .map(|i| commit(&format!("c{i}"), i * 2, json!({"i": i})))
        .collect();
    for r in &records {
        wal.append("p", r).unwrap();
    }
    (dir, records)
}

#[test]
fn every_half_open_window_matches() {
    let (dir, records) = filled(6);
    let wal = dir.open();

    for a in 0..=6u64 {
        for b in a..=7u64 {
            let expected = &records[a as usize..(b as usize).min(records.len())];
            assert_eq!(wal.read_range("p", a, Some(b)).unwrap(), expected.to_vec());
        }
        assert_eq!(
            wal.read_range("p", a, None).unwrap(),
            records[a as usize..].to_vec()
        );
    }
}

#[test]
fn inverted_range_fails_before_storage() {
    let dir = WalDir::new();
    let wal = dir.open();

    let err = wal.read_range("partition-e", 5, Some(1)).unwrap_err();

    assert!(err.is_validation());
    assert!(!dir.root().join("partition-e.jsonl").exists());
}

#[test]
fn never_appended_partition_is_not_an_error() {
    let dir = WalDir::new();
    let wal = dir.open();

    assert!(wal.read_range("missing", 0, None).unwrap().is_empty());
    assert_eq!(wal.get_latest_sequence("missing").unwrap(), 0);
}
