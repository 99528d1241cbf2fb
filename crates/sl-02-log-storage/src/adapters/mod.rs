//! # Adapters Module
//!
//! ## Modules
//!
//! - `storage`: `LogStorage` implementations (filesystem, in-memory)
//! - `lock`: storage-root process locking (single-writer guard)

#[cfg(feature = "locking")]
pub mod lock;
pub mod storage;
