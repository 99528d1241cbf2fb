//! Turns CLI arguments and the environment into a `SequencerConfig`.

use anyhow::{bail, Context};
use shared_crypto::{NoteVerifier, VerifierSet};
use sl_04_entry_sequencer::{IndexPolicy, SequencerConfig};
use std::path::Path;

use crate::cli::Args;

/// Environment variable holding the verifier key when `--public_key` is not given.
pub const PUBLIC_KEY_ENV: &str = "SERVERLESS_LOG_PUBLIC_KEY";

/// Resolve the trusted keys: the key file wins over the environment value.
///
/// Either source may hold several keys, one per line.
pub fn trusted_keys(
    key_file: Option<&Path>,
    env_value: Option<String>,
) -> anyhow::Result<VerifierSet> {
    let text = match key_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read public_key file {}", path.display()))?,
        None => match env_value.filter(|v| !v.trim().is_empty()) {
            Some(value) => value,
            None => bail!(
                "supply public key file path using --public_key or set {} environment variable",
                PUBLIC_KEY_ENV
            ),
        },
    };

    let verifiers = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            NoteVerifier::parse(line)
                .with_context(|| format!("invalid verifier key {:?}", line))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    if verifiers.is_empty() {
        bail!("public key is empty");
    }
    Ok(VerifierSet::new(verifiers))
}

pub fn sequencer_config(args: &Args, trusted_keys: VerifierSet) -> SequencerConfig {
    let policy = if args.index_duplicates {
        IndexPolicy::IncludeDuplicates
    } else {
        IndexPolicy::NewEntriesOnly
    };
    SequencerConfig::new(&args.storage_dir, args.origin.clone(), trusted_keys)
        .with_index_policy(policy)
}
