//! # Outbound Ports (Driven Ports)

use shared_types::{AppIdentifier, SequenceNumber};

use crate::domain::{IndexEntry, IndexError};

/// Maps application identifiers to sequence numbers.
///
/// Production: `FileIndexStore`
/// Testing: `InMemoryIndexStore`
pub trait IndexStore: Send {
    /// Entry for `identifier`; empty if it was never written.
    fn read(&self, identifier: &AppIdentifier) -> Result<IndexEntry, IndexError>;

    /// Append `seq`, creating the entry if needed.
    fn append(&mut self, identifier: &AppIdentifier, seq: SequenceNumber) -> Result<(), IndexError>;

    /// Append `seq` unless the entry already lists it.
    ///
    /// Returns `true` if the entry was written.
    fn append_if_absent(
        &mut self,
        identifier: &AppIdentifier,
        seq: SequenceNumber,
    ) -> Result<bool, IndexError>;
}
