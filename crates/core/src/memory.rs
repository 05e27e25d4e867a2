// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory commit log for tests

use crate::commit::CommitRecord;
use crate::error::WalError;
use crate::log::CommitLog;
use crate::validate::{validate_partition_id, validate_range};
use std::collections::BTreeMap;

/// Non-durable [`CommitLog`] with the same validation and offset rules as
/// the file-backed engine
#[derive(Debug, Clone, Default)]
pub struct MemoryWal {
    partitions: BTreeMap<String, Vec<CommitRecord>>,
}

impl MemoryWal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held for a partition
    pub fn len(&self, partition_id: &str) -> usize {
        self.partitions.get(partition_id).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// Partition ids that have received at least one append
    pub fn partitions(&self) -> impl Iterator<Item = &str> {
        self.partitions.keys().map(String::as_str)
    }
}

impl CommitLog for MemoryWal {
    fn append(&mut self, partition_id: &str, record: &CommitRecord) -> Result<(), WalError> {
        validate_partition_id(partition_id)?;
        record.validate()?;
        self.partitions
            .entry(partition_id.to_string())
            .or_default()
            .push(record.clone());
        Ok(())
    }

    fn read_range(
        &self,
        partition_id: &str,
        start_offset: u64,
        end_offset: Option<u64>,
    ) -> Result<Vec<CommitRecord>, WalError> {
        validate_partition_id(partition_id)?;
        validate_range(start_offset, end_offset)?;

        let Some(records) = self.partitions.get(partition_id) else {
            return Ok(Vec::new());
        };

        let len = records.len() as u64;
        let start = start_offset.min(len) as usize;
        let end = end_offset.map_or(len, |end| end.min(len)) as usize;
        Ok(records[start..end].to_vec())
    }

    fn get_latest_sequence(&self, partition_id: &str) -> Result<u64, WalError> {
        validate_partition_id(partition_id)?;
        Ok(self
            .partitions
            .get(partition_id)
            .and_then(|records| records.last())
            .map_or(0, |record| record.sequence_number))
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
