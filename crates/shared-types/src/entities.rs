//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Content**: `Entry`, `LeafHash`
//! - **Sequencing**: `SequenceNumber`, `SequenceResult`
//! - **Indexing**: `AppIdentifier`

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::IdentifierError;

/// A 32-byte SHA-256 digest.
pub type Hash = [u8; 32];

/// Permanent, gap-free position of an entry in the log.
pub type SequenceNumber = u64;

// =============================================================================
// CONTENT
// =============================================================================

/// Content fingerprint of an entry payload; the deduplication key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeafHash(pub Hash);

impl LeafHash {
    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &Hash {
        &self.0
    }

    /// Lowercase hex rendering, used for on-disk names.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for LeafHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0[..8]))
    }
}

/// An entry awaiting sequencing.
///
/// The payload is immutable once read; `name` is only used to tell the
/// operator which input a sequence number was assigned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Human-readable origin of the payload (usually the file path).
    pub name: String,
    /// Raw payload bytes.
    pub payload: Vec<u8>,
    /// Optional application identifier to index this entry under.
    pub identifier: Option<AppIdentifier>,
}

impl Entry {
    /// Create an entry without an identifier.
    pub fn new(name: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            payload,
            identifier: None,
        }
    }

    /// Attach an application identifier.
    pub fn with_identifier(mut self, identifier: AppIdentifier) -> Self {
        self.identifier = Some(identifier);
        self
    }
}

// =============================================================================
// SEQUENCING
// =============================================================================

/// Outcome of asking the store to sequence a leaf.
///
/// A duplicate carries the number originally assigned to the same content,
/// never a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceResult {
    pub sequence_number: SequenceNumber,
    pub is_duplicate: bool,
}

impl SequenceResult {
    /// A freshly assigned number.
    pub fn assigned(sequence_number: SequenceNumber) -> Self {
        Self {
            sequence_number,
            is_duplicate: false,
        }
    }

    /// The number previously assigned to identical content.
    pub fn duplicate(sequence_number: SequenceNumber) -> Self {
        Self {
            sequence_number,
            is_duplicate: true,
        }
    }
}

// =============================================================================
// INDEXING
// =============================================================================

/// Opaque application-chosen identifier, hex encoded at the edges.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppIdentifier(Vec<u8>);

impl AppIdentifier {
    /// Wrap raw identifier bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Decode a hex identifier as supplied on the command line.
    pub fn from_hex(input: &str) -> Result<Self, IdentifierError> {
        if input.is_empty() {
            return Err(IdentifierError::Empty);
        }
        hex::decode(input)
            .map(Self)
            .map_err(|e| IdentifierError::Decode {
                input: input.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Debug for AppIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppIdentifier({})", self.to_hex())
    }
}

impl fmt::Display for AppIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_hex_roundtrip_preserves_case_insensitive_input() {
        let id = AppIdentifier::from_hex("ABcd").unwrap();
        assert_eq!(id.as_bytes(), &[0xab, 0xcd]);
        assert_eq!(id.to_hex(), "abcd");
    }

    #[test]
    fn test_identifier_rejects_odd_length() {
        let err = AppIdentifier::from_hex("abc").unwrap_err();
        assert!(matches!(err, IdentifierError::Decode { .. }));
    }

    #[test]
    fn test_identifier_rejects_non_hex() {
        assert!(AppIdentifier::from_hex("zz").is_err());
    }

    #[test]
    fn test_identifier_rejects_empty() {
        assert_eq!(AppIdentifier::from_hex(""), Err(IdentifierError::Empty));
    }

    #[test]
    fn test_sequence_result_constructors() {
        assert!(!SequenceResult::assigned(4).is_duplicate);
        let dupe = SequenceResult::duplicate(4);
        assert!(dupe.is_duplicate);
        assert_eq!(dupe.sequence_number, 4);
    }

    #[test]
    fn test_leaf_hash_display_is_short_prefix() {
        let leaf = LeafHash([0xAB; 32]);
        assert_eq!(leaf.to_string(), "abababababababab");
        assert_eq!(leaf.to_hex().len(), 64);
    }

    #[test]
    fn test_entry_builder() {
        let entry = Entry::new("a.txt", b"x".to_vec())
            .with_identifier(AppIdentifier::from_bytes(vec![0xaa]));
        assert_eq!(entry.identifier.unwrap().to_hex(), "aa");
    }
}
