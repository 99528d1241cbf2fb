//! Shared fixtures for the integration scenarios.

use shared_crypto::{Ed25519KeyPair, NoteSigner, VerifierSet};
use sl_01_checkpoint::Checkpoint;
use sl_04_entry_sequencer::{IndexPolicy, SequencerConfig};
use std::fs;
use std::path::{Path, PathBuf};

pub const ORIGIN: &str = "transparency.example/log";

pub fn log_signer() -> NoteSigner {
    NoteSigner::new(ORIGIN, Ed25519KeyPair::from_seed([0x5a; 32])).unwrap()
}

pub fn witness_signer() -> NoteSigner {
    NoteSigner::new("witness.example", Ed25519KeyPair::from_seed([0x77; 32])).unwrap()
}

pub fn trusted() -> VerifierSet {
    log_signer().verifier().clone().into()
}

pub fn checkpoint_body(size: u64, extensions: &[&str]) -> String {
    Checkpoint {
        origin: ORIGIN.to_string(),
        size,
        root_hash: [0x42; 32],
        extensions: extensions.iter().map(|e| e.to_string()).collect(),
        signatures: vec![],
    }
    .marshal_body()
}

/// Sign `body` with the log key, then add a co-signature from `others`.
pub fn cosigned(body: &str, others: &[NoteSigner]) -> String {
    let mut note = log_signer().sign(body).unwrap();
    for signer in others {
        let signed = signer.sign(body).unwrap();
        // Signature lines follow the body and its blank separator line.
        note.push_str(&signed[body.len() + 1..]);
    }
    note
}

pub fn publish_checkpoint(root: &Path, size: u64) {
    fs::write(root.join("checkpoint"), log_signer().sign(&checkpoint_body(size, &[])).unwrap())
        .unwrap();
}

pub fn write_entry(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

pub fn config(root: &Path, policy: IndexPolicy) -> SequencerConfig {
    SequencerConfig::new(root, ORIGIN, trusted()).with_index_policy(policy)
}

/// Every regular file below `dir`, recursively.
pub fn files_under(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    if let Ok(read) = fs::read_dir(dir) {
        for entry in read {
            let path = entry.unwrap().path();
            if path.is_dir() {
                found.extend(files_under(&path));
            } else {
                found.push(path);
            }
        }
    }
    found
}
