//! # Leaf Hashing
//!
//! RFC 6962 leaf hashing over SHA-256.
//!
//! ## Domain Separation
//!
//! Leaves are hashed as `SHA-256(0x00 || payload)`. Interior nodes of the
//! log's Merkle tree use the `0x01` prefix, so a leaf digest can never be
//! mistaken for a node digest.

use sha2::{Digest, Sha256};
use shared_types::{Hash, LeafHash};

/// RFC 6962 leaf prefix.
pub const LEAF_PREFIX: u8 = 0x00;

/// Computes the content fingerprint used as the deduplication key.
pub trait LeafHasher: Send + Sync {
    /// Hash a leaf payload.
    fn hash_leaf(&self, payload: &[u8]) -> LeafHash;
}

/// The default hasher of the log (RFC 6962, SHA-256).
#[derive(Debug, Clone, Copy, Default)]
pub struct Rfc6962Hasher;

impl LeafHasher for Rfc6962Hasher {
    fn hash_leaf(&self, payload: &[u8]) -> LeafHash {
        let mut hasher = Sha256::new();
        hasher.update([LEAF_PREFIX]);
        hasher.update(payload);
        LeafHash(hasher.finalize().into())
    }
}

/// Plain SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}
