//! # Ports Layer
//!
//! - **Driven Ports (Outbound)**: where the raw checkpoint is read from.

pub mod outbound;

pub use outbound::*;
