//! # Outbound Ports (Driven Ports)
//!
//! Interfaces the entry sequencer drives.

use shared_types::{LeafHash, SequenceResult};
use sl_01_checkpoint::CheckpointSource;

use crate::domain::errors::StorageError;

/// A storage root holding a log.
///
/// Production: `FileLogStorage`
/// Testing: `InMemoryLogStorage`
pub trait LogStorage: CheckpointSource + Send + Sync {
    /// Store handle bound to one tree size.
    type Store: SequenceStore;

    /// Open the store for appending after `size` already-integrated leaves.
    ///
    /// `size` must come from a verified checkpoint.
    fn load(&self, size: u64) -> Result<Self::Store, StorageError>;
}

/// Assigns sequence numbers to leaves.
pub trait SequenceStore: Send {
    /// Sequence `leaf` under `leaf_hash`.
    ///
    /// ## Dedup Contract
    ///
    /// If `leaf_hash` was sequenced before, returns the original number with
    /// `is_duplicate = true` and writes nothing.
    fn sequence(
        &mut self,
        leaf_hash: &LeafHash,
        leaf: &[u8],
    ) -> Result<SequenceResult, StorageError>;
}
