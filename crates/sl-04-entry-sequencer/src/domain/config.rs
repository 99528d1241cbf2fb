//! Sequencer configuration.

use shared_crypto::VerifierSet;
use std::path::{Path, PathBuf};

/// Entries buffered between the file reader and the sequencer.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// Which entries update the application index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexPolicy {
    /// Only freshly sequenced entries are indexed.
    #[default]
    NewEntriesOnly,
    /// Duplicates are indexed too, unless their number is already listed.
    ///
    /// Re-running a batch whose index update failed repairs the index.
    IncludeDuplicates,
}

/// Everything a sequencing run needs besides its collaborators.
#[derive(Debug, Clone)]
pub struct SequencerConfig {
    pub storage_dir: PathBuf,
    /// Origin line the checkpoint must carry.
    pub origin: String,
    /// Keys a checkpoint must be signed by (at least one).
    pub trusted_keys: VerifierSet,
    pub index_policy: IndexPolicy,
    pub queue_capacity: usize,
}

impl SequencerConfig {
    pub fn new(
        storage_dir: impl AsRef<Path>,
        origin: impl Into<String>,
        trusted_keys: VerifierSet,
    ) -> Self {
        Self {
            storage_dir: storage_dir.as_ref().to_path_buf(),
            origin: origin.into(),
            trusted_keys,
            index_policy: IndexPolicy::default(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    pub fn with_index_policy(mut self, policy: IndexPolicy) -> Self {
        self.index_policy = policy;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SequencerConfig::new("/log", "example.com/log", VerifierSet::default());
        assert_eq!(config.queue_capacity, 100);
        assert_eq!(config.index_policy, IndexPolicy::NewEntriesOnly);
        assert_eq!(config.storage_dir, PathBuf::from("/log"));
    }
}
