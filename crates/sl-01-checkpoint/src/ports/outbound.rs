//! # Outbound Ports (Driven Ports)

use std::io;

/// Supplies the raw, still-unverified checkpoint document.
///
/// Production: `FileLogStorage` in `sl-02-log-storage` (reads
/// `<root>/checkpoint`).
pub trait CheckpointSource {
    /// Read the latest checkpoint bytes.
    fn read_checkpoint(&self) -> io::Result<Vec<u8>>;
}

impl CheckpointSource for Vec<u8> {
    fn read_checkpoint(&self) -> io::Result<Vec<u8>> {
        Ok(self.clone())
    }
}
