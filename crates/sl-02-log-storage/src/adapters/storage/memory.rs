use parking_lot::{Mutex, MutexGuard};
use shared_types::{LeafHash, SequenceNumber, SequenceResult};
use sl_01_checkpoint::CheckpointSource;
use std::collections::{BTreeMap, HashMap};
use std::io;
use std::sync::Arc;

use crate::domain::errors::StorageError;
use crate::ports::outbound::{LogStorage, SequenceStore};

/// Shared state behind [`InMemoryLogStorage`], open for inspection in tests.
#[derive(Debug, Default)]
pub struct MemoryLogState {
    /// Raw checkpoint bytes; `None` reads as a missing file.
    pub checkpoint: Option<Vec<u8>>,
    /// Size passed to the most recent `load`.
    pub loaded_at: Option<u64>,
    /// Every `sequence` call in order, including duplicates and failures.
    pub calls: Vec<LeafHash>,
    /// Sequenced payloads by number.
    pub leaves: BTreeMap<SequenceNumber, Vec<u8>>,
    /// Leaf hash to assigned number.
    pub by_leaf: HashMap<LeafHash, SequenceNumber>,
    /// Zero-based index of the `sequence` call that should fail.
    pub fail_on_call: Option<usize>,
    next_seq: SequenceNumber,
}

/// In-memory log storage for unit tests.
///
/// Clones share state, so a test can keep a handle while the sequencer owns
/// another. Allocation follows the file store: start at the loaded size and
/// skip numbers already holding a leaf.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLogStorage {
    state: Arc<Mutex<MemoryLogState>>,
}

impl InMemoryLogStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_checkpoint(raw: impl Into<Vec<u8>>) -> Self {
        let storage = Self::new();
        storage.set_checkpoint(raw);
        storage
    }

    pub fn set_checkpoint(&self, raw: impl Into<Vec<u8>>) {
        self.state.lock().checkpoint = Some(raw.into());
    }

    /// Make the `index`-th `sequence` call (zero-based) fail with a backend error.
    pub fn fail_on_call(&self, index: usize) {
        self.state.lock().fail_on_call = Some(index);
    }

    pub fn state(&self) -> MutexGuard<'_, MemoryLogState> {
        self.state.lock()
    }

    pub fn calls(&self) -> Vec<LeafHash> {
        self.state.lock().calls.clone()
    }

    pub fn leaf_count(&self) -> usize {
        self.state.lock().leaves.len()
    }
}

impl CheckpointSource for InMemoryLogStorage {
    fn read_checkpoint(&self) -> io::Result<Vec<u8>> {
        self.state
            .lock()
            .checkpoint
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no checkpoint"))
    }
}

impl LogStorage for InMemoryLogStorage {
    type Store = InMemorySequenceStore;

    fn load(&self, size: u64) -> Result<InMemorySequenceStore, StorageError> {
        let mut state = self.state.lock();
        state.loaded_at = Some(size);
        state.next_seq = size;
        Ok(InMemorySequenceStore {
            state: Arc::clone(&self.state),
        })
    }
}

/// Sequencing handle over an [`InMemoryLogStorage`].
#[derive(Debug)]
pub struct InMemorySequenceStore {
    state: Arc<Mutex<MemoryLogState>>,
}

impl SequenceStore for InMemorySequenceStore {
    fn sequence(
        &mut self,
        leaf_hash: &LeafHash,
        leaf: &[u8],
    ) -> Result<SequenceResult, StorageError> {
        let mut state = self.state.lock();
        let call = state.calls.len();
        state.calls.push(*leaf_hash);

        if state.fail_on_call == Some(call) {
            return Err(StorageError::Backend {
                message: format!("injected failure on call {}", call),
            });
        }

        if let Some(&seq) = state.by_leaf.get(leaf_hash) {
            return Ok(SequenceResult::duplicate(seq));
        }

        let mut seq = state.next_seq;
        while state.leaves.contains_key(&seq) {
            seq = seq.checked_add(1).ok_or(StorageError::Exhausted { next: seq })?;
        }
        let next = seq.checked_add(1).ok_or(StorageError::Exhausted { next: seq })?;

        state.leaves.insert(seq, leaf.to_vec());
        state.by_leaf.insert(*leaf_hash, seq);
        state.next_seq = next;
        Ok(SequenceResult::assigned(seq))
    }
}
