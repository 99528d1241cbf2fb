//! # Checkpoint Entity
//!
//! The signed body of a checkpoint is line oriented:
//!
//! | Line | Content |
//! |------|---------|
//! | 1 | origin |
//! | 2 | tree size, decimal, no sign or leading zeros |
//! | 3 | root hash, base64 of 32 bytes |
//! | 4.. | optional extension lines |

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use shared_crypto::NoteSignature;
use shared_types::Hash;

use super::errors::CheckpointError;

/// A verified statement of the log's size and root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    pub origin: String,
    pub size: u64,
    pub root_hash: Hash,
    /// Extension lines after the root hash, without trailing newlines.
    pub extensions: Vec<String>,
    /// Signatures that verified against a trusted key.
    pub signatures: Vec<NoteSignature>,
}

impl Checkpoint {
    /// Parse the signed body text of a checkpoint.
    ///
    /// Signatures are attached by the gate after the note has been opened.
    pub fn parse_body(text: &str) -> Result<Self, CheckpointError> {
        let body = text
            .strip_suffix('\n')
            .ok_or_else(|| malformed("body must end in a newline"))?;
        let mut lines = body.split('\n');

        let origin = lines
            .next()
            .filter(|l| !l.is_empty())
            .ok_or_else(|| malformed("missing origin"))?;
        let size_line = lines.next().ok_or_else(|| malformed("missing size"))?;
        let root_line = lines.next().ok_or_else(|| malformed("missing root hash"))?;

        let size = parse_size(size_line)?;

        let root_bytes = BASE64
            .decode(root_line)
            .map_err(|_| malformed("root hash is not base64"))?;
        let root_hash: Hash = root_bytes
            .as_slice()
            .try_into()
            .map_err(|_| malformed("root hash must be 32 bytes"))?;

        let extensions = lines.map(str::to_string).collect::<Vec<_>>();
        if extensions.iter().any(String::is_empty) {
            return Err(malformed("empty extension line"));
        }

        Ok(Self {
            origin: origin.to_string(),
            size,
            root_hash,
            extensions,
            signatures: Vec::new(),
        })
    }

    /// Render the body text this checkpoint was parsed from.
    pub fn marshal_body(&self) -> String {
        let mut out = format!(
            "{}\n{}\n{}\n",
            self.origin,
            self.size,
            BASE64.encode(self.root_hash)
        );
        for ext in &self.extensions {
            out.push_str(ext);
            out.push('\n');
        }
        out
    }
}

fn parse_size(line: &str) -> Result<u64, CheckpointError> {
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed("size must be a decimal number"));
    }
    if line.len() > 1 && line.starts_with('0') {
        return Err(malformed("size has leading zeros"));
    }
    line.parse::<u64>()
        .map_err(|_| malformed("size out of range"))
}

fn malformed(reason: &str) -> CheckpointError {
    CheckpointError::Malformed(reason.to_string())
}
