//! # Shared Crypto - Log Cryptographic Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256 (RFC 6962 leaf) | Entry content fingerprints |
//! | `signatures` | Ed25519 | Checkpoint signatures |
//! | `note` | Signed note (`name+hash+key`) | Checkpoint envelope |
//!
//! ## Security Properties
//!
//! - **RFC 6962 leaf prefix**: leaf digests can never collide with interior
//!   node digests of the same tree.
//! - **Ed25519**: deterministic nonces, no RNG dependency.
//! - **Key hash binding**: a note signature is only checked against the key
//!   whose name *and* 4-byte hash match.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod note;
pub mod signatures;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{sha256, LeafHasher, Rfc6962Hasher};
pub use note::{Note, NoteSignature, NoteSigner, NoteVerifier, VerifierSet};
pub use signatures::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
