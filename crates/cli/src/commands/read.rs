// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ccn-wal read <partition>` - Read records by offset

use crate::output::{print_records, OutputFormat};
use anyhow::Result;
use ccn_core::CommitLog;
use clap::Args;

#[derive(Args)]
pub struct ReadArgs {
    /// Partition identifier
    pub partition: String,

    /// First offset to read (inclusive)
    #[arg(long, default_value_t = 0)]
    pub start: u64,

    /// Offset to stop before (exclusive); reads to the end when omitted
    #[arg(long)]
    pub end: Option<u64>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn handle(wal: &impl CommitLog, args: ReadArgs) -> Result<()> {
    let records = wal.read_range(&args.partition, args.start, args.end)?;
    print_records(&records, args.format);
    Ok(())
}
