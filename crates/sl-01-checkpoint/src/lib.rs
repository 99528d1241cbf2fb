//! # Checkpoint Gate (sl-01)
//!
//! Establishes a trusted view of the log before anything is appended to it.
//! The gate reads the checkpoint published at the storage root, verifies its
//! signature against the configured keys and origin, and hands back the log
//! size the sequencing store must be opened at.
//!
//! ## Fail-Closed
//!
//! ```text
//! raw bytes ──→ [origin prefix] ──→ [note signatures] ──→ [body parse] ──→ Checkpoint
//!                     │                    │                   │
//!                     └────────────────────┴───────────────────┴──→ CheckpointError (fatal)
//! ```
//!
//! Nothing downstream runs unless every step succeeds; a forged or corrupted
//! checkpoint would otherwise desynchronize local state from the log.
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): checkpoint entity, body parser, errors
//! - **Ports Layer** (`ports/`): `CheckpointSource` (where raw bytes come from)
//! - **Service** (`service.rs`): `CheckpointGate`

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{Checkpoint, CheckpointError, CheckpointErrorKind};
pub use ports::CheckpointSource;
pub use service::CheckpointGate;
