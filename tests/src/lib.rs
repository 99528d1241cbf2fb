//! # Serverless Log Test Suite
//!
//! Scenarios that cross crate boundaries, run against real storage roots in
//! temporary directories.
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fixtures.rs        # signed checkpoints, entry files
//!     ├── sequencing_flows.rs
//!     └── storage_safety.rs  # re-runs and the storage lock
//! ```
//!
//! ```bash
//! cargo test -p sl-tests
//! cargo test -p sl-tests integration::sequencing_flows
//! ```

pub mod integration;
