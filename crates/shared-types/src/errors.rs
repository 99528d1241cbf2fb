//! # Error Types
//!
//! Errors raised by the shared entities themselves.

use thiserror::Error;

/// Errors decoding an application identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// The identifier is not valid hex.
    #[error("Unable to hex decode identifier {input:?}: {reason}")]
    Decode { input: String, reason: String },

    /// An identifier was supplied but it is empty.
    #[error("Identifier must not be empty")]
    Empty,
}
