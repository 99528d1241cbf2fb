//! sl-sequence: assign sequence numbers to entry files in a serverless log.
//!
//! ```text
//! sl-sequence --storage_dir /srv/log --origin example.com/log \
//!     --entries 'incoming/*.entry' [--identifier aa] [--public_key log.pub]
//! ```
//!
//! Prints `<seq>: <file>` per entry, ` (dupe)` for content already in the
//! log. Any failure prints one diagnostic line and exits with status 1.

mod cli;
mod config;
mod telemetry;

use anyhow::Context;
use clap::Parser;
use sl_02_log_storage::StorageLock;
use sl_04_entry_sequencer::{resolve_candidates, EntrySequencer, SequencerError};
use tracing::error;

use crate::cli::Args;
use crate::telemetry::LogSettings;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = telemetry::init_logging(&LogSettings::from_env()) {
        eprintln!("Failed to initialize logging: {:#}", e);
        std::process::exit(1);
    }

    if let Err(err) = run(args).await {
        match err.downcast_ref::<SequencerError>() {
            Some(e) => error!(kind = ?e.kind(), "{:#}", err),
            None => error!("{:#}", err),
        }
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let trusted = config::trusted_keys(
        args.public_key.as_deref(),
        std::env::var(config::PUBLIC_KEY_ENV).ok(),
    )?;
    let candidates = resolve_candidates(&args.entries, args.identifier.as_deref())?;

    let _lock = if args.lock_storage {
        Some(StorageLock::acquire(&args.storage_dir).context("Failed to lock log storage")?)
    } else {
        None
    };

    let mut sequencer = EntrySequencer::from_config(config::sequencer_config(&args, trusted))?;
    sequencer.run_candidates(candidates).await?;
    Ok(())
}
