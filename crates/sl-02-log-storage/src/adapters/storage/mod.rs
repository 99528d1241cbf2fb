//! Storage Adapters
//!
//! Implementations of the `LogStorage` and `SequenceStore` traits.

mod file;
mod memory;

pub use file::{FileLogStorage, FileSequenceStore};
pub use memory::{InMemoryLogStorage, InMemorySequenceStore, MemoryLogState};
