//! # Domain Layer

pub mod candidates;
pub mod config;
pub mod errors;
pub mod report;

pub use candidates::{resolve_candidates, Candidate};
pub use config::{IndexPolicy, SequencerConfig, DEFAULT_QUEUE_CAPACITY};
pub use errors::{ErrorKind, SequencerError};
pub use report::{SequenceReport, SequencedEntry};
