//! # Domain Layer
//!
//! Pure checkpoint logic. No I/O; raw bytes arrive through
//! [`crate::ports::CheckpointSource`].

pub mod checkpoint;
pub mod errors;

pub use checkpoint::*;
pub use errors::*;
