//! # Entry Sequencer (sl-04)
//!
//! Appends a batch of entry files to a serverless log and keeps the
//! application-identifier index in step.
//!
//! ## Run
//!
//! ```text
//! glob ──→ candidates ──→ checkpoint gate ──→ load store at checkpoint size
//!                                                       │
//!   [producer task] read file ──→ mpsc(100) ──→ [consumer] hash ──→ sequence ──→ index
//! ```
//!
//! The consumer handles entries strictly in resolution order, one at a time.
//! Any failure ends the run; entries already sequenced stay sequenced.
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): config, candidates, errors, report
//! - **Pipeline** (`pipeline.rs`): bounded producer task
//! - **Service** (`service/`): `EntrySequencer`, generic over `LogStorage`
//!   and `IndexStore`

pub mod domain;
pub mod pipeline;
pub mod service;

pub use domain::{
    resolve_candidates, Candidate, ErrorKind, IndexPolicy, SequenceReport, SequencedEntry,
    SequencerConfig, SequencerError, DEFAULT_QUEUE_CAPACITY,
};
pub use service::{EntrySequencer, SequencerDependencies};
