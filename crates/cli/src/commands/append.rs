// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ccn-wal append <partition>` - Durably append a commit record

use anyhow::{bail, Context, Result};
use ccn_core::{CommitLog, CommitRecord};
use clap::Args;
use serde_json::{Map, Value};

#[derive(Args)]
pub struct AppendArgs {
    /// Partition identifier
    pub partition: String,

    /// Caller-assigned commit identifier
    #[arg(long)]
    pub commit_id: String,

    /// Sequence number (expected non-decreasing per partition)
    #[arg(long)]
    pub sequence: u64,

    /// Payload as a JSON object
    #[arg(short, long, default_value = "{}")]
    pub payload: String,

    /// Metadata as a JSON object
    #[arg(short, long)]
    pub metadata: Option<String>,
}

pub fn handle(wal: &mut impl CommitLog, args: AppendArgs) -> Result<()> {
    let payload = parse_object("payload", &args.payload)?;
    let mut record = CommitRecord::new(args.commit_id, args.sequence, payload);
    if let Some(metadata) = &args.metadata {
        record = record.with_metadata(parse_object("metadata", metadata)?);
    }

    wal.append(&args.partition, &record)?;
    println!(
        "appended {} to partition {} at sequence {}",
        record.commit_id, args.partition, record.sequence_number
    );
    Ok(())
}

fn parse_object(name: &str, json: &str) -> Result<Map<String, Value>> {
    let value: Value =
        serde_json::from_str(json).with_context(|| format!("{} is not valid JSON", name))?;
    match value {
        Value::Object(object) => Ok(object),
        _ => bail!("{} must be a JSON object", name),
    }
}
