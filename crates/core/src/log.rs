// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The capability set every WAL backing store provides
//!
//! Commit, query and lineage layers hold a `CommitLog` and never reach
//! persisted state any other way.

use crate::commit::CommitRecord;
use crate::error::WalError;

/// Partitioned, append-only commit log
///
/// Offsets are zero-based, dense, append-order indices into a partition.
/// At most one writer per partition is assumed; callers serialize appends.
pub trait CommitLog {
    /// Persist a record at the end of the partition
    ///
    /// Returning `Ok` means the record is visible to every later read.
    fn append(&mut self, partition_id: &str, record: &CommitRecord) -> Result<(), WalError>;

    /// Read records at offsets `[start_offset, end_offset)`, or to the end
    ///
    /// A partition that has never been appended to yields an empty vec.
    fn read_range(
        &self,
        partition_id: &str,
        start_offset: u64,
        end_offset: Option<u64>,
    ) -> Result<Vec<CommitRecord>, WalError>;

    /// Sequence number of the last appended record, or 0 with no history
    ///
    /// Reports the last record physically appended. It equals the maximum
    /// only when callers append non-decreasing sequence numbers.
    fn get_latest_sequence(&self, partition_id: &str) -> Result<u64, WalError>;
}
