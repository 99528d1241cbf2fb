//! Index path layout.

use shared_crypto::sha256;
use shared_types::AppIdentifier;
use std::path::{Path, PathBuf};

/// Directory under the storage root holding all index entries.
pub const INDEX_DIR: &str = "index";

/// Directory and file name of the index entry for `identifier`.
///
/// Sharded on the SHA-256 of the raw identifier bytes, so arbitrary
/// identifiers map to fixed-length, filesystem-safe names.
pub fn index_path(root: &Path, identifier: &AppIdentifier) -> (PathBuf, String) {
    let h = hex::encode(sha256(identifier.as_bytes()));
    let dir = root.join(INDEX_DIR).join(&h[0..2]).join(&h[2..4]);
    (dir, h[4..].to_string())
}
