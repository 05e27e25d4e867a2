// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ccn-wal latest <partition>` - Print the latest sequence number

use anyhow::Result;
use ccn_core::CommitLog;
use clap::Args;

#[derive(Args)]
pub struct LatestArgs {
    /// Partition identifier
    pub partition: String,
}

pub fn handle(wal: &impl CommitLog, args: LatestArgs) -> Result<()> {
    println!("{}", wal.get_latest_sequence(&args.partition)?);
    Ok(())
}
