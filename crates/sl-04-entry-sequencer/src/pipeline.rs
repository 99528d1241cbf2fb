//! # Entry Pipeline
//!
//! A single producer task reads candidate files in order and publishes them
//! on a bounded channel. The producer waits while the channel is full.
//!
//! A read failure is published as an `Err` item in the failing entry's slot
//! and the producer stops, so the consumer sees every earlier entry first
//! and nothing after it.

use shared_types::Entry;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::{Candidate, SequencerError};

/// One slot in the pipeline.
pub type EntryItem = Result<Entry, SequencerError>;

/// Consumer end of the pipeline.
pub struct EntryReader {
    rx: mpsc::Receiver<EntryItem>,
    task: JoinHandle<()>,
}

impl EntryReader {
    /// Start reading `candidates` on a new task.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// `Config` if `capacity` is zero.
    pub fn spawn(candidates: Vec<Candidate>, capacity: usize) -> Result<Self, SequencerError> {
        if capacity == 0 {
            return Err(SequencerError::Config(
                "entry queue capacity must be at least 1".to_string(),
            ));
        }

        let (tx, rx) = mpsc::channel(capacity);
        let task = tokio::spawn(produce(candidates, tx));
        Ok(Self { rx, task })
    }

    /// Next entry in resolution order, `None` once the producer is done.
    pub async fn next(&mut self) -> Option<EntryItem> {
        self.rx.recv().await
    }

    /// Wait for the producer to exit.
    ///
    /// Call after `next` returned `None`; a producer that died early is
    /// reported instead of being mistaken for a finished batch.
    pub async fn finish(self) -> Result<(), SequencerError> {
        drop(self.rx);
        self.task
            .await
            .map_err(|e| SequencerError::Pipeline(e.to_string()))
    }

    /// Stop the producer without waiting for it.
    pub fn abort(self) {
        self.task.abort();
    }
}

async fn produce(candidates: Vec<Candidate>, tx: mpsc::Sender<EntryItem>) {
    for candidate in candidates {
        let item = match tokio::fs::read(&candidate.path).await {
            Ok(payload) => {
                let mut entry = Entry::new(candidate.name, payload);
                entry.identifier = candidate.identifier;
                Ok(entry)
            }
            Err(source) => Err(SequencerError::EntryRead {
                entry: candidate.name,
                source,
            }),
        };
        let failed = item.is_err();

        if tx.send(item).await.is_err() {
            debug!("Entry consumer gone, stopping reader");
            return;
        }
        if failed {
            return;
        }
    }
}
