//! # Signed Notes
//!
//! Checkpoints travel as signed notes: a UTF-8 text block, a blank line, and
//! one signature line per signer.
//!
//! ```text
//! example.com/log
//! 42
//! qINS1GRFhWHwdkUeqLEoP4yEMkTBBzxBkGwGQlVlVcs=
//!
//! — example.com/log Az3grlgtzPICa5OS8npVmf1Myq/5IZniMp+ZJurmRDeOoRDe4URYN7u5/Zhcyv2q1gGzGku9nTo+zyWE+xeMcTOAYQ8=
//! ```
//!
//! ## Key Format
//!
//! Verifier keys are `<name>+<hash>+<keydata>` where `keydata` is the base64
//! of `0x01 || ed25519 public key` and `hash` is the first four bytes of
//! `SHA-256(name || "\n" || keydata)` rendered as 8 hex digits.
//!
//! ## Trust Rules
//!
//! - Signatures from unknown keys are carried along but never trusted.
//! - A signature claiming a known key that fails to verify rejects the note.
//! - A note with no trusted signature is rejected.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::fmt;

use crate::hashing::sha256;
use crate::signatures::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
use crate::CryptoError;

/// Algorithm byte for Ed25519 keys.
pub const ALG_ED25519: u8 = 0x01;

/// Prefix of every signature line (em dash, space).
pub const SIGNATURE_PREFIX: &str = "\u{2014} ";

/// Upper bound on signature lines accepted on a single note.
pub const MAX_SIGNATURES: usize = 100;

fn is_valid_key_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('+')
        && !name.chars().any(|c| c.is_whitespace() || c.is_control())
}

fn compute_key_hash(name: &str, key_data: &[u8]) -> u32 {
    let mut preimage = Vec::with_capacity(name.len() + 1 + key_data.len());
    preimage.extend_from_slice(name.as_bytes());
    preimage.push(b'\n');
    preimage.extend_from_slice(key_data);
    let digest = sha256(&preimage);
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

fn encode_key_data(key: &Ed25519PublicKey) -> Vec<u8> {
    let mut key_data = Vec::with_capacity(33);
    key_data.push(ALG_ED25519);
    key_data.extend_from_slice(key.as_bytes());
    key_data
}

// =============================================================================
// VERIFIERS
// =============================================================================

/// A trusted note signer's public half.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteVerifier {
    name: String,
    hash: u32,
    key: Ed25519PublicKey,
}

impl NoteVerifier {
    /// Build a verifier for `key` under `name`.
    pub fn new(name: &str, key: Ed25519PublicKey) -> Result<Self, CryptoError> {
        if !is_valid_key_name(name) {
            return Err(CryptoError::MalformedVerifierKey(format!(
                "invalid key name {:?}",
                name
            )));
        }
        let hash = compute_key_hash(name, &encode_key_data(&key));
        Ok(Self {
            name: name.to_string(),
            hash,
            key,
        })
    }

    /// Parse a `<name>+<hash>+<keydata>` verifier key.
    pub fn parse(vkey: &str) -> Result<Self, CryptoError> {
        let vkey = vkey.trim();
        let malformed = |reason: &str| CryptoError::MalformedVerifierKey(reason.to_string());

        let (name, rest) = vkey.split_once('+').ok_or_else(|| malformed("missing key hash"))?;
        let (hash_hex, key_b64) = rest
            .split_once('+')
            .ok_or_else(|| malformed("missing key data"))?;

        if !is_valid_key_name(name) {
            return Err(malformed("invalid key name"));
        }
        if hash_hex.len() != 8 {
            return Err(malformed("key hash must be 8 hex digits"));
        }
        let hash = u32::from_str_radix(hash_hex, 16).map_err(|_| malformed("key hash is not hex"))?;

        let key_data = BASE64
            .decode(key_b64)
            .map_err(|_| malformed("key data is not base64"))?;
        let (alg, key_bytes) = key_data.split_first().ok_or_else(|| malformed("empty key data"))?;
        if *alg != ALG_ED25519 {
            return Err(CryptoError::UnsupportedAlgorithm(*alg));
        }
        let key = Ed25519PublicKey::from_slice(key_bytes)?;

        if compute_key_hash(name, &key_data) != hash {
            return Err(malformed("key hash does not match key"));
        }

        Ok(Self {
            name: name.to_string(),
            hash,
            key,
        })
    }

    /// Key name (for checkpoints, conventionally the log origin).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 4-byte key hash.
    pub fn key_hash(&self) -> u32 {
        self.hash
    }

    /// Underlying public key.
    pub fn public_key(&self) -> &Ed25519PublicKey {
        &self.key
    }

    /// Verify a raw signature over `message`.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
        let signature = Ed25519Signature::from_slice(signature)?;
        self.key.verify(message, &signature)
    }
}

impl fmt::Display for NoteVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}+{:08x}+{}",
            self.name,
            self.hash,
            BASE64.encode(encode_key_data(&self.key))
        )
    }
}

/// The set of keys a note may be verified against.
#[derive(Clone, Debug, Default)]
pub struct VerifierSet {
    verifiers: Vec<NoteVerifier>,
}

impl VerifierSet {
    /// Collect `verifiers` into a set. Later duplicates of a name and hash
    /// are never consulted.
    pub fn new(verifiers: Vec<NoteVerifier>) -> Self {
        Self { verifiers }
    }

    /// True when no key is trusted.
    pub fn is_empty(&self) -> bool {
        self.verifiers.is_empty()
    }

    /// Number of trusted keys.
    pub fn len(&self) -> usize {
        self.verifiers.len()
    }

    /// Look up a verifier by name and key hash.
    pub fn find(&self, name: &str, hash: u32) -> Option<&NoteVerifier> {
        self.verifiers
            .iter()
            .find(|v| v.hash == hash && v.name == name)
    }
}

impl From<NoteVerifier> for VerifierSet {
    fn from(verifier: NoteVerifier) -> Self {
        Self::new(vec![verifier])
    }
}

// =============================================================================
// NOTES
// =============================================================================

/// One signature line of a note.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteSignature {
    /// Signer name, which is also the key name.
    pub name: String,
    /// Key hash taken from the first four bytes of the signature blob.
    pub hash: u32,
    /// Raw signature bytes following the key hash.
    pub signature: Vec<u8>,
}

/// An opened note whose text carries at least one trusted signature.
#[derive(Clone, Debug)]
pub struct Note {
    /// Signed text, including its trailing newline.
    pub text: String,
    /// Signatures that verified against a trusted key.
    pub verified: Vec<NoteSignature>,
    /// Signatures from keys not in the verifier set.
    pub unverified: Vec<NoteSignature>,
}

impl Note {
    /// Split, parse and verify a signed note.
    pub fn open(msg: &[u8], verifiers: &VerifierSet) -> Result<Self, CryptoError> {
        let malformed = |reason: &str| CryptoError::MalformedNote(reason.to_string());

        let msg = std::str::from_utf8(msg).map_err(|_| malformed("note is not UTF-8"))?;
        if msg.chars().any(|c| c != '\n' && c.is_control()) {
            return Err(malformed("note contains control characters"));
        }

        let split = msg
            .rfind("\n\n")
            .ok_or_else(|| malformed("missing signature block"))?;
        let text = &msg[..split + 1];
        let sig_block = &msg[split + 2..];
        let sig_block = sig_block
            .strip_suffix('\n')
            .ok_or_else(|| malformed("signature block must end in a newline"))?;
        if sig_block.is_empty() {
            return Err(malformed("no signatures"));
        }

        let mut verified: Vec<NoteSignature> = Vec::new();
        let mut unverified = Vec::new();

        for (count, line) in sig_block.split('\n').enumerate() {
            if count >= MAX_SIGNATURES {
                return Err(malformed("too many signatures"));
            }
            let sig = parse_signature_line(line)?;

            match verifiers.find(&sig.name, sig.hash) {
                Some(verifier) => {
                    if verified
                        .iter()
                        .any(|v| v.name == sig.name && v.hash == sig.hash)
                    {
                        continue;
                    }
                    verifier
                        .verify(text.as_bytes(), &sig.signature)
                        .map_err(|_| CryptoError::InvalidNoteSignature {
                            name: sig.name.clone(),
                            hash: sig.hash,
                        })?;
                    verified.push(sig);
                }
                None => unverified.push(sig),
            }
        }

        if verified.is_empty() {
            return Err(CryptoError::UnverifiedNote);
        }

        Ok(Self {
            text: text.to_string(),
            verified,
            unverified,
        })
    }
}

fn parse_signature_line(line: &str) -> Result<NoteSignature, CryptoError> {
    let malformed = |reason: &str| CryptoError::MalformedNote(reason.to_string());

    let body = line
        .strip_prefix(SIGNATURE_PREFIX)
        .ok_or_else(|| malformed("signature line missing prefix"))?;
    let (name, b64) = body
        .split_once(' ')
        .ok_or_else(|| malformed("signature line missing signature"))?;
    if !is_valid_key_name(name) {
        return Err(malformed("invalid signer name"));
    }
    let raw = BASE64
        .decode(b64)
        .map_err(|_| malformed("signature is not base64"))?;
    if raw.len() < 5 {
        return Err(malformed("signature too short"));
    }

    Ok(NoteSignature {
        name: name.to_string(),
        hash: u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]),
        signature: raw[4..].to_vec(),
    })
}

// =============================================================================
// SIGNING
// =============================================================================

/// Produces signed notes. Used by fixtures and operator tooling that already
/// holds a key.
pub struct NoteSigner {
    verifier: NoteVerifier,
    keypair: Ed25519KeyPair,
}

impl NoteSigner {
    /// Sign notes as `name` with `keypair`. Fails on a name that cannot
    /// appear in a signature line.
    pub fn new(name: &str, keypair: Ed25519KeyPair) -> Result<Self, CryptoError> {
        let verifier = NoteVerifier::new(name, keypair.public_key())?;
        Ok(Self { verifier, keypair })
    }

    /// The verifier matching this signer.
    pub fn verifier(&self) -> &NoteVerifier {
        &self.verifier
    }

    /// Sign `text` (which must end in a newline) and return the full note.
    pub fn sign(&self, text: &str) -> Result<String, CryptoError> {
        if !text.ends_with('\n') {
            return Err(CryptoError::MalformedNote(
                "note text must end in a newline".to_string(),
            ));
        }
        let signature = self.keypair.sign(text.as_bytes());
        let mut raw = Vec::with_capacity(68);
        raw.extend_from_slice(&self.verifier.hash.to_be_bytes());
        raw.extend_from_slice(signature.as_bytes());

        Ok(format!(
            "{}\n{}{} {}\n",
            text,
            SIGNATURE_PREFIX,
            self.verifier.name,
            BASE64.encode(raw)
        ))
    }
}
