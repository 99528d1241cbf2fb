//! # Sequencer Errors
//!
//! Every variant ends the run. `kind()` groups them so an embedding can
//! decide how to react without matching on every variant.

use shared_types::{IdentifierError, SequenceNumber};
use sl_01_checkpoint::CheckpointError;
use sl_02_log_storage::StorageError;
use sl_03_app_index::IndexError;
use std::io;
use thiserror::Error;

/// Category of a [`SequencerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input before any work was done.
    Configuration,
    /// The published checkpoint could not be trusted.
    Checkpoint,
    /// An entry file could not be read.
    EntryRead,
    /// The store failed to sequence an entry.
    Sequencing,
    /// The index update for a sequenced entry failed.
    Index,
}

#[derive(Debug, Error)]
pub enum SequencerError {
    #[error("Sequence must be run with at least one valid entry (no match for {pattern:?})")]
    NoEntries { pattern: String },

    #[error("Failed to glob entries {pattern:?}: {reason}")]
    Glob { pattern: String, reason: String },

    #[error("Unable to hex decode app-specific identifier: {0}")]
    Identifier(#[from] IdentifierError),

    #[error("Invalid checkpoint trust configuration: {0}")]
    Trust(#[source] CheckpointError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to verify log checkpoint: {0}")]
    Checkpoint(#[from] CheckpointError),

    #[error("Failed to load storage: {0}")]
    StorageLoad(#[source] StorageError),

    #[error("Failed to read entry file {entry:?}: {source}")]
    EntryRead {
        entry: String,
        #[source]
        source: io::Error,
    },

    #[error("Entry reader stopped unexpectedly: {0}")]
    Pipeline(String),

    #[error("Failed to sequence {entry:?}: {source}")]
    Sequencing {
        entry: String,
        #[source]
        source: StorageError,
    },

    #[error("Failed to update index for {entry:?} (sequenced as {seq}): {source}")]
    Index {
        entry: String,
        seq: SequenceNumber,
        #[source]
        source: IndexError,
    },
}

impl SequencerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SequencerError::NoEntries { .. }
            | SequencerError::Glob { .. }
            | SequencerError::Identifier(_)
            | SequencerError::Trust(_)
            | SequencerError::Config(_) => ErrorKind::Configuration,
            SequencerError::Checkpoint(_) => ErrorKind::Checkpoint,
            SequencerError::EntryRead { .. } | SequencerError::Pipeline(_) => ErrorKind::EntryRead,
            SequencerError::StorageLoad(_) | SequencerError::Sequencing { .. } => {
                ErrorKind::Sequencing
            }
            SequencerError::Index { .. } => ErrorKind::Index,
        }
    }

    /// Label of the entry being processed when the run failed, if any.
    pub fn entry(&self) -> Option<&str> {
        match self {
            SequencerError::EntryRead { entry, .. }
            | SequencerError::Sequencing { entry, .. }
            | SequencerError::Index { entry, .. } => Some(entry),
            _ => None,
        }
    }
}
