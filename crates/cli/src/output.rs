// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use ccn_core::CommitRecord;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One canonical JSONL line per record
    Text,
    /// A pretty-printed JSON array
    Json,
}

/// Print records in the specified format
pub fn print_records(records: &[CommitRecord], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for record in records {
                println!("{}", record.to_line());
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(records) {
                println!("{}", json);
            }
        }
    }
}
