// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ccn-core: commit records and the WAL contract
//!
//! This crate provides:
//! - The [`CommitRecord`] data contract and its canonical line encoding
//! - The [`CommitLog`] trait every WAL backing store implements
//! - The [`WalError`] taxonomy shared by all implementations
//! - [`MemoryWal`], a non-durable implementation for collaborator tests

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod commit;
pub mod error;
pub mod log;
pub mod memory;
pub mod validate;

pub use commit::{CommitRecord, EntryError};
pub use error::{EntryLocation, IoAction, ValidationError, WalError};
pub use log::CommitLog;
pub use memory::MemoryWal;
pub use validate::{validate_partition_id, validate_range};
