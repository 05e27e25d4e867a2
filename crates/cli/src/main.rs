// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ccn-wal - inspect and append to a commit WAL directory

mod commands;
mod output;

use anyhow::{bail, Context, Result};
use ccn_storage::{FileWal, WalConfig};
use clap::{Parser, Subcommand};
use commands::{append, latest, read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ccn-wal",
    version,
    about = "Commit WAL - durable partitioned commit log"
)]
struct Cli {
    /// WAL root directory
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// TOML config file (`root`, `rotation_threshold_bytes`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Partition size in bytes that triggers a rotation warning
    #[arg(long, global = true)]
    rotation_threshold: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Durably append a commit record to a partition
    Append(append::AppendArgs),
    /// Read records from a partition by offset
    Read(read::ReadArgs),
    /// Print the latest sequence number of a partition
    Latest(latest::LatestArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let config = resolve_config(&cli)?;
    tracing::debug!(
        root = %config.root.display(),
        rotation_threshold_bytes = config.rotation_threshold_bytes,
        "opening WAL"
    );
    let mut wal = FileWal::with_config(&config)?;

    match cli.command {
        Commands::Append(args) => append::handle(&mut wal, args),
        Commands::Read(args) => read::handle(&wal, args),
        Commands::Latest(args) => latest::handle(&wal, args),
    }
}

/// Merge the config file (if any) with command-line overrides
fn resolve_config(cli: &Cli) -> Result<WalConfig> {
    let mut config = match (&cli.config, &cli.dir) {
        (Some(path), _) => WalConfig::load(path).context("could not load WAL config")?,
        (None, Some(dir)) => WalConfig::new(dir),
        (None, None) => bail!("no WAL directory given; pass --dir or --config"),
    };

    if let Some(dir) = &cli.dir {
        config.root = dir.clone();
    }
    if let Some(bytes) = cli.rotation_threshold {
        config.rotation_threshold_bytes = bytes;
    }
    config.validate()?;
    Ok(config)
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
