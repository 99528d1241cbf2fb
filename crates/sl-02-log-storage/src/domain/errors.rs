//! # Domain Errors
//!
//! Error types for the sequencing store.
//!
//! ## Design Principles
//!
//! - A duplicate leaf is a successful outcome, never an error here
//! - Every variant is fatal to the sequencing run that hit it

use shared_types::SequenceNumber;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur during storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// Storage root is missing or not a directory.
    InvalidRoot { path: PathBuf },

    /// Filesystem I/O error.
    Io { path: PathBuf, source: io::Error },

    /// A leaf-hash record exists but does not hold a sequence number.
    CorruptLeafRecord { path: PathBuf, contents: String },

    /// Sequence number space is exhausted.
    Exhausted { next: SequenceNumber },

    /// Injected or backend-specific failure.
    Backend { message: String },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::InvalidRoot { path } => {
                write!(f, "Storage root is not a directory: {}", path.display())
            }
            StorageError::Io { path, source } => {
                write!(f, "Storage I/O error at {}: {}", path.display(), source)
            }
            StorageError::CorruptLeafRecord { path, contents } => {
                write!(
                    f,
                    "Corrupt leaf record {}: {:?} is not a sequence number",
                    path.display(),
                    contents
                )
            }
            StorageError::Exhausted { next } => {
                write!(f, "Sequence number space exhausted at {}", next)
            }
            StorageError::Backend { message } => write!(f, "Storage backend error: {}", message),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
