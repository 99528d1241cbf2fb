//! # Application Index (sl-03)
//!
//! Secondary lookup from an application-chosen identifier to the sequence
//! numbers of the entries submitted under it.
//!
//! ## On-Disk Shape
//!
//! ```text
//! <root>/index/<h[0..2]>/<h[2..4]>/<h[4..]>    h = hex(SHA-256(identifier))
//!
//! {"Indices":[5,9]}
//! ```
//!
//! A path that was never written reads as an empty entry.
//!
//! ## Concurrency
//!
//! Updates are read-modify-write with no guard. Two processes updating the
//! same identifier at once can lose an append; callers serialize runs per
//! storage root (see `StorageLock` in `sl-02-log-storage`).
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - `IndexEntry`, path layout, errors
//! - `ports/` - `IndexStore`
//! - `adapters/` - JSON file store, in-memory recording store

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::{FileIndexStore, InMemoryIndexStore, IndexCall};
pub use domain::{index_path, IndexEntry, IndexError};
pub use ports::IndexStore;
