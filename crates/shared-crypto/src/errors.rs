//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Signature verification failed
    #[error("Signature verification failed")]
    SignatureVerificationFailed,

    /// Invalid signature format
    #[error("Invalid signature format")]
    InvalidSignatureFormat,

    /// Invalid public key
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Verifier key string could not be parsed
    #[error("Malformed verifier key: {0}")]
    MalformedVerifierKey(String),

    /// Unsupported key algorithm byte
    #[error("Unsupported key algorithm: {0:#04x}")]
    UnsupportedAlgorithm(u8),

    /// Note text or signature block is malformed
    #[error("Malformed note: {0}")]
    MalformedNote(String),

    /// A signature from a known key did not verify
    #[error("Invalid signature for key {name}+{hash:08x}")]
    InvalidNoteSignature {
        /// Key name
        name: String,
        /// Key hash
        hash: u32,
    },

    /// No signature on the note came from a trusted key
    #[error("Note has no verifiable signatures")]
    UnverifiedNote,
}
