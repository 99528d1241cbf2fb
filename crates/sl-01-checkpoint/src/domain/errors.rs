//! # Domain Errors
//!
//! Every checkpoint error is fatal to a sequencing run. The two kinds let a
//! caller tell "could not read it" apart from "read it and it is not
//! trustworthy".

use shared_crypto::CryptoError;
use std::io;
use thiserror::Error;

/// Coarse classification of [`CheckpointError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckpointErrorKind {
    /// The checkpoint could not be read at all.
    Unreadable,
    /// The checkpoint was read but failed verification or parsing.
    Invalid,
}

/// Errors produced by the checkpoint gate.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// I/O failure reading the checkpoint.
    #[error("Failed to read log checkpoint: {0}")]
    Unreadable(#[source] io::Error),

    /// The checkpoint does not start with the expected origin line.
    #[error("Invalid checkpoint: incorrect origin, expected {expected:?}")]
    OriginMismatch { expected: String },

    /// Signature block failed to verify against the trusted keys.
    #[error("Invalid checkpoint: {0}")]
    Signature(#[from] CryptoError),

    /// The signed body is not a well-formed checkpoint.
    #[error("Invalid checkpoint: {0}")]
    Malformed(String),

    /// The gate was built without any trusted key.
    #[error("No trusted checkpoint keys configured")]
    NoTrustedKeys,

    /// The gate was built without an origin.
    #[error("Checkpoint origin must not be empty")]
    EmptyOrigin,
}

impl CheckpointError {
    /// Classify the error.
    pub fn kind(&self) -> CheckpointErrorKind {
        match self {
            Self::Unreadable(_) => CheckpointErrorKind::Unreadable,
            _ => CheckpointErrorKind::Invalid,
        }
    }
}
