//! # Log Storage (sl-02)
//!
//! The sequencing store assigns every distinct leaf a permanent, gap-free
//! sequence number. Resubmitting content that is already in the log is not
//! an error: the store answers with the original number and flags the result
//! as a duplicate.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Content Dedup | One sequence number per leaf hash, forever |
//! | 2 | Gap-Free | Numbers are allocated from the checkpoint size upward |
//! | 3 | No Reuse | A number already holding a leaf is skipped, never overwritten |
//! | 4 | Single Writer | One sequencing run per storage root at a time |
//!
//! Invariant 4 is the caller's responsibility; `StorageLock` is available
//! to enforce it.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - errors and on-disk path layout
//! - `ports/` - `LogStorage` and `SequenceStore` traits
//! - `adapters/` - file-backed and in-memory stores, storage-root lock

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::storage::{
    FileLogStorage, FileSequenceStore, InMemoryLogStorage, InMemorySequenceStore, MemoryLogState,
};
pub use domain::errors::StorageError;
pub use ports::outbound::{LogStorage, SequenceStore};

#[cfg(feature = "locking")]
pub use adapters::lock::{LockError, StorageLock};
