//! # Checkpoint Gate Service
//!
//! Binds the trusted keys and expected origin, then turns raw checkpoint
//! bytes into a verified [`Checkpoint`].

use shared_crypto::{Note, VerifierSet};
use tracing::{debug, info};

use crate::domain::{Checkpoint, CheckpointError};
use crate::ports::CheckpointSource;

/// Verifies checkpoints against a fixed origin and key set.
#[derive(Debug, Clone)]
pub struct CheckpointGate {
    origin: String,
    verifiers: VerifierSet,
}

impl CheckpointGate {
    /// Create a gate.
    ///
    /// # Errors
    ///
    /// - `EmptyOrigin` if `origin` is empty
    /// - `NoTrustedKeys` if `verifiers` is empty
    pub fn new(origin: impl Into<String>, verifiers: VerifierSet) -> Result<Self, CheckpointError> {
        let origin = origin.into();
        if origin.is_empty() {
            return Err(CheckpointError::EmptyOrigin);
        }
        if verifiers.is_empty() {
            return Err(CheckpointError::NoTrustedKeys);
        }
        Ok(Self { origin, verifiers })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Verify raw checkpoint bytes.
    ///
    /// The origin line is checked before any signature work so a checkpoint
    /// for a different log is rejected cheaply.
    pub fn verify(&self, raw: &[u8]) -> Result<Checkpoint, CheckpointError> {
        let prefix = format!("{}\n", self.origin);
        if !raw.starts_with(prefix.as_bytes()) {
            return Err(CheckpointError::OriginMismatch {
                expected: self.origin.clone(),
            });
        }

        let note = Note::open(raw, &self.verifiers)?;
        let mut checkpoint = Checkpoint::parse_body(&note.text)?;
        if checkpoint.origin != self.origin {
            return Err(CheckpointError::OriginMismatch {
                expected: self.origin.clone(),
            });
        }
        debug!(
            verified = note.verified.len(),
            unverified = note.unverified.len(),
            "Checkpoint signatures checked"
        );
        checkpoint.signatures = note.verified;

        Ok(checkpoint)
    }

    /// Read the checkpoint from `source` and verify it.
    pub fn read_and_verify<S>(&self, source: &S) -> Result<Checkpoint, CheckpointError>
    where
        S: CheckpointSource + ?Sized,
    {
        let raw = source
            .read_checkpoint()
            .map_err(CheckpointError::Unreadable)?;
        let checkpoint = self.verify(&raw)?;

        info!(
            origin = %checkpoint.origin,
            size = checkpoint.size,
            "Verified log checkpoint"
        );
        Ok(checkpoint)
    }
}
