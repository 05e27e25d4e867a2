//! Replay specs
//!
//! Records appended by one engine instance are recovered by another.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn replay_recovers_entries_in_order() {
    let dir = WalDir::new();
    let entries = stages();
    {
        let mut writer = dir.open();
        for entry in &entries {
            writer.append("partition-1", entry).unwrap();
        }
    }

    let replay = dir.open();

    assert_eq!(replay.read_range("partition-1", 0, None).unwrap(), entries);
    assert_eq!(replay.get_latest_sequence("partition-1").unwrap(), 12);
}

#[test]
fn replay_continues_appending_after_restart() {
    let dir = WalDir::new();
    dir.open()
        .append("p1", &commit("c1", 10, json!({"stage": "ingest"})))
        .unwrap();

    let mut restarted = dir.open();
    restarted
        .append("p1", &commit("c2", 11, json!({"stage": "index"})))
        .unwrap();

    let ids: Vec<_> = restarted
        .read_range("p1", 0, None)
        .unwrap()
        .into_iter()
        .map(|r| r.commit_id)
        .collect();
    assert_eq!(ids, vec!["c1".to_string(), "c2".to_string()]);
    assert_eq!(restarted.get_latest_sequence("p1").unwrap(), 11);
}

#[test]
fn metadata_survives_replay() {
    let dir = WalDir::new();
    let Value::Object(metadata) = json!({"actor": "replay-spec", "tags": ["a", "b"]}) else {
        unreachable!()
    };
    let entry = commit("c1", 1, json!({"nested": {"z": 1, "a": 2}})).with_metadata(metadata);
    dir.open().append("p1", &entry).unwrap();

    assert_eq!(dir.open().read_range("p1", 0, None).unwrap(), vec![entry]);
}

#[test]
fn collaborators_see_the_trait_only() {
    fn record_stages(log: &mut dyn CommitLog) -> u64 {
        for entry in stages() {
            log.append("pipeline", &entry).unwrap();
        }
        log.get_latest_sequence("pipeline").unwrap()
    }

    let dir = WalDir::new();
    let mut wal = dir.open();

    assert_eq!(record_stages(&mut wal), 12);
}
