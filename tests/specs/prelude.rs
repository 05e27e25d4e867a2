//! Shared fixtures for WAL specs

pub use ccn_core::{CommitLog, CommitRecord, WalError};
pub use ccn_storage::FileWal;
pub use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary WAL directory that outlives the engines opened on it
pub struct WalDir {
    dir: TempDir,
}

impl WalDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().join("wal")
    }

    /// Open a fresh engine instance on the directory
    pub fn open(&self) -> FileWal {
        FileWal::open(self.root()).unwrap()
    }

    /// Write raw partition content, bypassing the engine
    pub fn write_raw(&self, partition: &str, content: &str) {
        std::fs::create_dir_all(self.root()).unwrap();
        std::fs::write(self.root().join(format!("{partition}.jsonl")), content).unwrap();
    }
}

/// Build a record from a JSON payload object
pub fn commit(commit_id: &str, sequence_number: u64, payload: Value) -> CommitRecord {
    let Value::Object(payload) = payload else {
        panic!("payload must be an object");
    };
    CommitRecord::new(commit_id, sequence_number, payload)
}

pub fn stages() -> Vec<CommitRecord> {
    vec![
        commit("integration-1", 10, json!({"stage": "ingest"})),
        commit("integration-2", 11, json!({"stage": "canonicalize"})),
        commit("integration-3", 12, json!({"stage": "index"})),
    ]
}
