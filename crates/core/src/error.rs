// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy shared by every WAL implementation

use crate::commit::EntryError;
use std::fmt;
use thiserror::Error;

/// Malformed caller input, always raised before any I/O
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("partition_id must be a non-empty string")]
    EmptyPartition,
    #[error("partition_id '{0}' must name a path inside the WAL directory")]
    UnsafePartition(String),
    #[error("commit_id must be provided")]
    EmptyCommitId,
    #[error("end_offset ({end}) must be greater than or equal to start_offset ({start})")]
    InvertedRange { start: u64, end: u64 },
}

/// The storage step that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoAction {
    Append,
    Read,
    Inspect,
}

impl fmt::Display for IoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoAction::Append => write!(f, "append"),
            IoAction::Read => write!(f, "read"),
            IoAction::Inspect => write!(f, "inspect"),
        }
    }
}

/// Where in a partition a malformed entry was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLocation {
    /// Zero-based line offset, as seen by a forward read
    Offset(u64),
    /// The last non-empty line, as seen by the backward tail scan
    Tail,
}

impl fmt::Display for EntryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryLocation::Offset(offset) => write!(f, "at offset {}", offset),
            EntryLocation::Tail => write!(f, "at end of partition"),
        }
    }
}

/// Errors that can occur in WAL operations
#[derive(Debug, Error)]
pub enum WalError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    /// The message names the partition, never the file path
    #[error("failed to {action} WAL entries for partition '{partition}'")]
    Io {
        action: IoAction,
        partition: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed WAL entry {location}: {source}")]
    Malformed {
        location: EntryLocation,
        #[source]
        source: EntryError,
    },
}

impl WalError {
    pub fn io(action: IoAction, partition: &str, source: std::io::Error) -> Self {
        Self::Io {
            action,
            partition: partition.to_string(),
            source,
        }
    }

    pub fn malformed(location: EntryLocation, source: EntryError) -> Self {
        Self::Malformed { location, source }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, WalError::Validation(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, WalError::Malformed { .. })
    }
}
