//! # Shared Types Crate
//!
//! Entities passed between the log subsystems.
//!
//! ## Design Principles
//!
//! - **Content Identity**: an entry is identified by the digest of its payload,
//!   never by its label.
//! - **Opaque Identifiers**: application identifiers are raw bytes internally
//!   and hex only at the edges.

pub mod entities;
pub mod errors;
pub mod fs;

pub use entities::*;
pub use errors::*;
