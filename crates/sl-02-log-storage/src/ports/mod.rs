//! # Ports Layer
//!
//! - **Driven Ports (Outbound)**: the store the sequencer appends through.

pub mod outbound;

pub use outbound::*;
