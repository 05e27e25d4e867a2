// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-backed write-ahead log
//!
//! ## Durability Guarantees
//!
//! - Every append is flushed and `fsync`'d before returning
//! - The file handle is released after each append
//! - Reads re-validate every entry; the file is an external artifact
//!
//! The engine assumes one writer per partition. Concurrent appends to the
//! same partition can interleave and corrupt line boundaries.

use crate::config::{ConfigError, WalConfig};
use crate::tail;
use ccn_core::{
    validate_partition_id, validate_range, CommitLog, CommitRecord, EntryLocation, IoAction,
    WalError,
};
use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// File extension of partition files
pub const PARTITION_EXTENSION: &str = "jsonl";

/// Errors that can occur opening a WAL
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("failed to create WAL directory: {0}")]
    CreateDir(#[source] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Durable JSONL write-ahead log with one file per partition
#[derive(Debug)]
pub struct FileWal {
    root: PathBuf,
    rotation_threshold_bytes: u64,
    /// Partitions already reported as needing rotation
    warned_partitions: HashSet<String>,
}

impl FileWal {
    /// Open or create a WAL rooted at the given directory
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, OpenError> {
        Self::with_config(&WalConfig::new(root))
    }

    /// Open or create a WAL from configuration
    pub fn with_config(config: &WalConfig) -> Result<Self, OpenError> {
        config.validate()?;
        fs::create_dir_all(&config.root).map_err(OpenError::CreateDir)?;

        Ok(Self {
            root: config.root.clone(),
            rotation_threshold_bytes: config.rotation_threshold_bytes,
            warned_partitions: HashSet::new(),
        })
    }

    /// Get the WAL root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn rotation_threshold_bytes(&self) -> u64 {
        self.rotation_threshold_bytes
    }

    /// Whether a rotation warning has been emitted for the partition
    pub fn is_rotation_flagged(&self, partition_id: &str) -> bool {
        self.warned_partitions.contains(partition_id)
    }

    /// Path of the file backing a (validated) partition id
    pub fn partition_path(&self, partition_id: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", partition_id, PARTITION_EXTENSION))
    }

    /// Emit the rotation warning the first time a partition crosses the threshold
    ///
    /// Advisory only: nothing is rotated, truncated or archived.
    fn check_rotation(&mut self, partition_id: &str, size_bytes: u64) {
        if size_bytes <= self.rotation_threshold_bytes {
            return;
        }
        if self.warned_partitions.insert(partition_id.to_string()) {
            warn!(
                partition = partition_id,
                size_bytes,
                threshold_bytes = self.rotation_threshold_bytes,
                "partition {} WAL has reached {} bytes and requires rotation",
                partition_id,
                size_bytes
            );
        }
    }
}

/// Append bytes, flush and sync, then release the handle
///
/// Returns the file size after the write when it can be determined.
fn write_durably(path: &Path, bytes: &[u8]) -> io::Result<Option<u64>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(bytes)?;
    file.flush()?;

    // Critical: sync to ensure durability before returning
    file.sync_all()?;

    Ok(file.metadata().ok().map(|metadata| metadata.len()))
}

/// Open a partition file for reading, treating a missing file as no history
fn open_existing(path: &Path) -> io::Result<Option<File>> {
    match File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}

impl CommitLog for FileWal {
    fn append(&mut self, partition_id: &str, record: &CommitRecord) -> Result<(), WalError> {
        validate_partition_id(partition_id)?;
        record.validate()?;

        let mut line = record.to_line();
        line.push('\n');

        let path = self.partition_path(partition_id);
        let size = write_durably(&path, line.as_bytes())
            .map_err(|e| WalError::io(IoAction::Append, partition_id, e))?;

        debug!(
            partition = partition_id,
            commit_id = %record.commit_id,
            sequence_number = record.sequence_number,
            "appended commit record"
        );

        if let Some(size) = size {
            self.check_rotation(partition_id, size);
        }
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

        let io_err = |e| WalError::io(IoAction::Read, partition_id, e);
        let Some(file) = open_existing(&self.partition_path(partition_id)).map_err(io_err)? else {
            return Ok(Vec::new());
        };

        let mut reader = BufReader::new(file);
        let mut records = Vec::new();
        let mut line = Vec::new();
        let mut offset = 0u64;

        while !end_offset.is_some_and(|end| offset >= end) {
            line.clear();
            if reader.read_until(b'\n', &mut line).map_err(io_err)? == 0 {
                break; // EOF
            }

            if offset >= start_offset && !is_blank(&line) {
                let record = CommitRecord::from_bytes(&line)
                    .map_err(|e| WalError::malformed(EntryLocation::Offset(offset), e))?;
                records.push(record);
            }
            offset += 1;
        }

        debug!(
            partition = partition_id,
            start_offset,
            end_offset = ?end_offset,
            count = records.len(),
            "read commit records"
        );
        Ok(records)
    }

    fn get_latest_sequence(&self, partition_id: &str) -> Result<u64, WalError> {
        validate_partition_id(partition_id)?;

        let io_err = |e| WalError::io(IoAction::Inspect, partition_id, e);
        let Some(mut file) =
            open_existing(&self.partition_path(partition_id)).map_err(io_err)?
        else {
            return Ok(0);
        };

        let Some(line) = tail::last_non_empty_line(&mut file).map_err(io_err)? else {
            return Ok(0);
        };

        let record = CommitRecord::from_bytes(&line)
            .map_err(|e| WalError::malformed(EntryLocation::Tail, e))?;
        Ok(record.sequence_number)
    }
}

#[cfg(test)]
#[path = "wal_tests.rs"]
mod tests;
