//! # Entry Sequencer Service
//!
//! Orchestrates one sequencing run:
//! 1. Resolve candidates (configuration errors surface here, before any I/O on the log)
//! 2. Verify the checkpoint and open the store at its size
//! 3. Drain the entry pipeline, sequencing and indexing one entry at a time
//!
//! The service holds no log state of its own between runs.


use shared_crypto::{LeafHasher, Rfc6962Hasher};
use shared_types::Entry;
use sl_01_checkpoint::CheckpointGate;
use sl_02_log_storage::{FileLogStorage, LogStorage, SequenceStore};
use sl_03_app_index::{FileIndexStore, IndexStore};
use tracing::{debug, info};

use crate::domain::{
    resolve_candidates, Candidate, IndexPolicy, SequenceReport, SequencedEntry, SequencerConfig,
    SequencerError,
};
use crate::pipeline::EntryReader;

/// Collaborators of an [`EntrySequencer`].
pub struct SequencerDependencies<L, I> {
    pub storage: L,
    pub index: I,
}

/// Appends entry files to a log and maintains the application index.
pub struct EntrySequencer<L, I>
where
    L: LogStorage,
    I: IndexStore,
{
    pub(crate) storage: L,
    pub(crate) index: I,
    pub(crate) hasher: Box<dyn LeafHasher>,
    pub(crate) gate: CheckpointGate,
    pub(crate) config: SequencerConfig,
}

impl EntrySequencer<FileLogStorage, FileIndexStore> {
    /// Sequencer over the file store and file index at `config.storage_dir`.
    pub fn from_config(config: SequencerConfig) -> Result<Self, SequencerError> {
        let deps = SequencerDependencies {
            storage: FileLogStorage::new(&config.storage_dir),
            index: FileIndexStore::new(&config.storage_dir),
        };
        Self::new(deps, config)
    }
}

impl<L, I> EntrySequencer<L, I>
where
    L: LogStorage,
    I: IndexStore,
{
    /// # Errors
    ///
    /// `Trust` if the origin is empty or no keys are trusted, `Config` if the
    /// queue capacity is zero.
    pub fn new(
        deps: SequencerDependencies<L, I>,
        config: SequencerConfig,
    ) -> Result<Self, SequencerError> {
        if config.queue_capacity == 0 {
            return Err(SequencerError::Config(
                "entry queue capacity must be at least 1".to_string(),
            ));
        }
        let gate = CheckpointGate::new(config.origin.clone(), config.trusted_keys.clone())
            .map_err(SequencerError::Trust)?;

        Ok(Self {
            storage: deps.storage,
            index: deps.index,
            hasher: Box::new(Rfc6962Hasher),
            gate,
            config,
        })
    }

    /// Replace the leaf hasher.
    pub fn with_hasher(mut self, hasher: impl LeafHasher + 'static) -> Self {
        self.hasher = Box::new(hasher);
        self
    }

    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    pub fn storage(&self) -> &L {
        &self.storage
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Sequence every file matching `pattern`, tagging each with `identifier`
    /// (hex) when given.
    pub async fn run(
        &mut self,
        pattern: &str,
        identifier: Option<&str>,
    ) -> Result<SequenceReport, SequencerError> {
        let candidates = resolve_candidates(pattern, identifier)?;
        self.run_candidates(candidates).await
    }

    /// Sequence already-resolved candidates in the order given.
    ///
    /// Each candidate carries its own identifier.
    pub async fn run_candidates(
        &mut self,
        candidates: Vec<Candidate>,
    ) -> Result<SequenceReport, SequencerError> {
        if candidates.is_empty() {
            return Err(SequencerError::NoEntries {
                pattern: String::new(),
            });
        }

        let checkpoint = self.gate.read_and_verify(&self.storage)?;
        let mut store = self
            .storage
            .load(checkpoint.size)
            .map_err(SequencerError::StorageLoad)?;

        let mut reader = EntryReader::spawn(candidates, self.config.queue_capacity)?;
        let mut report = SequenceReport::new(checkpoint.size);

        while let Some(item) = reader.next().await {
            match item.and_then(|entry| self.process(&mut store, entry)) {
                Ok(outcome) => {
                    info!("{}", outcome.log_line());
                    report.push(outcome);
                }
                Err(e) => {
                    reader.abort();
                    return Err(e);
                }
            }
        }
        reader.finish().await?;

        info!(
            new = report.new_count(),
            duplicates = report.duplicate_count(),
            indexed = report.indexed_count(),
            "Sequencing complete"
        );
        Ok(report)
    }

    fn process(
        &mut self,
        store: &mut L::Store,
        entry: Entry,
    ) -> Result<SequencedEntry, SequencerError> {
        let leaf_hash = self.hasher.hash_leaf(&entry.payload);
        let result = store
            .sequence(&leaf_hash, &entry.payload)
            .map_err(|source| SequencerError::Sequencing {
                entry: entry.name.clone(),
                source,
            })?;
        let seq = result.sequence_number;

        let indexed = match &entry.identifier {
            None => false,
            Some(id) => {
                let written = if !result.is_duplicate {
                    self.index.append(id, seq).map(|()| true)
                } else if self.config.index_policy == IndexPolicy::IncludeDuplicates {
                    self.index.append_if_absent(id, seq)
                } else {
                    Ok(false)
                };
                let written = written.map_err(|source| SequencerError::Index {
                    entry: entry.name.clone(),
                    seq,
                    source,
                })?;
                if written {
                    debug!(seq, identifier = %id, "Index updated");
                }
                written
            }
        };

        Ok(SequencedEntry {
            name: entry.name,
            sequence_number: seq,
            is_duplicate: result.is_duplicate,
            indexed,
        })
    }
}
