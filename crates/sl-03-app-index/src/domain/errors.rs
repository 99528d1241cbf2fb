//! # Index Errors
//!
//! Every variant is fatal to the run. The entry it belongs to is already
//! sequenced by the time the index is touched.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Unable to create index directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to read index {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to decode existing JSON index {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unable to encode JSON index: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Unable to write index {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Index backend error: {0}")]
    Backend(String),
}
