//! # Storage Root Locking
//!
//! Keeps two sequencing runs from allocating numbers in the same storage root.
//!
//! - `flock`: `StorageLock` over an fs2 advisory lock

mod flock;
#[cfg(test)]
mod tests;

pub use flock::{LockError, StorageLock};
