use serde::{Deserialize, Deserializer, Serialize};
use shared_types::SequenceNumber;

/// Sequence numbers recorded under one identifier, in append order.
///
/// Appends are not deduplicated: the same number may appear twice if it was
/// appended twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    #[serde(rename = "Indices", default, deserialize_with = "null_as_empty")]
    pub indices: Vec<SequenceNumber>,
}

impl IndexEntry {
    pub fn new(indices: Vec<SequenceNumber>) -> Self {
        Self { indices }
    }

    pub fn push(&mut self, seq: SequenceNumber) {
        self.indices.push(seq);
    }

    pub fn contains(&self, seq: SequenceNumber) -> bool {
        self.indices.contains(&seq)
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

// Writers that never appended may have stored `"Indices": null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SequenceNumber>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<SequenceNumber>>::deserialize(deserializer)?.unwrap_or_default())
}
