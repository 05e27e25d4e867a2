// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Input validation applied before any storage access

use crate::error::ValidationError;

/// Check that a partition id is non-empty and names a path under the root
///
/// Ids may contain `/` to nest partitions in sub-directories, but every
/// component must be a plain name.
pub fn validate_partition_id(partition_id: &str) -> Result<(), ValidationError> {
    if partition_id.trim().is_empty() {
        return Err(ValidationError::EmptyPartition);
    }

    let escapes_root = partition_id.contains(['\\', '\0'])
        || partition_id
            .split('/')
            .any(|component| component.is_empty() || component == "." || component == "..");
    if escapes_root {
        return Err(ValidationError::UnsafePartition(partition_id.to_string()));
    }

    Ok(())
}

/// Check that an offset range is not inverted
pub fn validate_range(start_offset: u64, end_offset: Option<u64>) -> Result<(), ValidationError> {
    match end_offset {
        Some(end) if end < start_offset => Err(ValidationError::InvertedRange {
            start: start_offset,
            end,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
