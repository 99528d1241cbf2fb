//! # Adapters Module
//!
//! - `file`: one JSON document per identifier under the storage root
//! - `memory`: recording store for unit tests

mod file;
mod memory;

pub use file::FileIndexStore;
pub use memory::{InMemoryIndexStore, IndexCall};
