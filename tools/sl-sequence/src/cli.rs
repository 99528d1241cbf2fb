//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Sequence entry files into a serverless transparency log.
#[derive(Parser, Debug)]
#[command(name = "sl-sequence")]
#[command(about = "Assign sequence numbers to entry files in a serverless log")]
pub struct Args {
    /// Root directory of the log storage
    #[arg(long = "storage_dir")]
    pub storage_dir: PathBuf,

    /// File path glob of entries to add to the log
    #[arg(long)]
    pub entries: String,

    /// Hex identifier to index every entry under
    #[arg(long)]
    pub identifier: Option<String>,

    /// Path to the log's verifier key (falls back to SERVERLESS_LOG_PUBLIC_KEY)
    #[arg(long = "public_key")]
    pub public_key: Option<PathBuf>,

    /// Log origin the checkpoint must carry
    #[arg(long)]
    pub origin: String,

    /// Also index entries that were already sequenced (repairs a failed index update)
    #[arg(long = "index_duplicates")]
    pub index_duplicates: bool,

    /// Hold an exclusive lock on the storage root for the whole run
    #[arg(long = "lock_storage")]
    pub lock_storage: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snake_case_flags() {
        let args = Args::try_parse_from([
            "sl-sequence",
            "--storage_dir",
            "/srv/log",
            "--entries",
            "in/*.entry",
            "--origin",
            "example.com/log",
            "--identifier",
            "aa",
            "--lock_storage",
        ])
        .unwrap();

        assert_eq!(args.storage_dir, PathBuf::from("/srv/log"));
        assert_eq!(args.identifier.as_deref(), Some("aa"));
        assert!(args.lock_storage);
        assert!(!args.index_duplicates);
        assert!(args.public_key.is_none());
    }

    #[test]
    fn test_origin_required() {
        let result = Args::try_parse_from([
            "sl-sequence",
            "--storage_dir",
            "/srv/log",
            "--entries",
            "*",
        ]);
        assert!(result.is_err());
    }
}
