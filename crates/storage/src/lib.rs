// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ccn-storage: file-backed write-ahead log
//!
//! Each partition is one append-only JSONL file under the WAL root:
//!
//! ```text
//! CommitRecord → to_line() → FileWal::append → fsync → <root>/<partition>.jsonl
//!                                                           ↓
//!                              read_range (forward) / get_latest_sequence (backward)
//! ```

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod config;
mod tail;
pub mod wal;

pub use config::{ConfigError, WalConfig, DEFAULT_ROTATION_THRESHOLD_BYTES};
pub use wal::{FileWal, OpenError, PARTITION_EXTENSION};
