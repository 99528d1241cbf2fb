//! # On-Disk Layout
//!
//! ```text
//! <root>/
//! ├── checkpoint                      signed checkpoint note
//! ├── LOCK                            optional storage lock
//! ├── seq/00/00/00/00/2a              payload of sequence number 42
//! └── leaves/pending/ab/cd/ef/<rest>  hex sequence number for leaf hash abcdef<rest>
//! ```
//!
//! Both trees are sharded so no directory holds more than 256 children
//! (apart from the last level of `leaves/`).

use shared_types::{LeafHash, SequenceNumber};
use std::path::{Path, PathBuf};

/// Name of the checkpoint file under the storage root.
pub const CHECKPOINT_FILE: &str = "checkpoint";

/// Directory and file name holding the payload for `seq`.
pub fn seq_path(root: &Path, seq: SequenceNumber) -> (PathBuf, String) {
    let dir = root
        .join("seq")
        .join(format!("{:02x}", seq >> 32))
        .join(format!("{:02x}", (seq >> 24) & 0xff))
        .join(format!("{:02x}", (seq >> 16) & 0xff))
        .join(format!("{:02x}", (seq >> 8) & 0xff));
    (dir, format!("{:02x}", seq & 0xff))
}

/// Directory and file name of the dedup record for `leaf_hash`.
pub fn leaf_path(root: &Path, leaf_hash: &LeafHash) -> (PathBuf, String) {
    let hex = leaf_hash.to_hex();
    let dir = root
        .join("leaves")
        .join("pending")
        .join(&hex[0..2])
        .join(&hex[2..4])
        .join(&hex[4..6]);
    (dir, hex[6..].to_string())
}

/// Path of the checkpoint file.
pub fn checkpoint_path(root: &Path) -> PathBuf {
    root.join(CHECKPOINT_FILE)
}
