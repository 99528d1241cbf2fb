use parking_lot::Mutex;
use shared_types::{AppIdentifier, SequenceNumber};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{IndexEntry, IndexError};
use crate::ports::IndexStore;

/// A mutating call made against an [`InMemoryIndexStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexCall {
    Append {
        identifier: AppIdentifier,
        seq: SequenceNumber,
    },
    AppendIfAbsent {
        identifier: AppIdentifier,
        seq: SequenceNumber,
    },
}

#[derive(Debug, Default)]
struct MemoryIndexState {
    entries: HashMap<AppIdentifier, IndexEntry>,
    calls: Vec<IndexCall>,
    fail_on_call: Option<usize>,
}

/// In-memory index store for unit tests.
///
/// Records every mutating call. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIndexStore {
    state: Arc<Mutex<MemoryIndexState>>,
}

impl InMemoryIndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the `index`-th mutating call (zero-based) fail.
    pub fn fail_on_call(&self, index: usize) {
        self.state.lock().fail_on_call = Some(index);
    }

    pub fn calls(&self) -> Vec<IndexCall> {
        self.state.lock().calls.clone()
    }

    pub fn indices(&self, identifier: &AppIdentifier) -> Vec<SequenceNumber> {
        self.state
            .lock()
            .entries
            .get(identifier)
            .map(|e| e.indices.clone())
            .unwrap_or_default()
    }

    pub fn identifier_count(&self) -> usize {
        self.state.lock().entries.len()
    }

    fn record(&self, call: IndexCall) -> Result<(), IndexError> {
        let mut state = self.state.lock();
        let n = state.calls.len();
        state.calls.push(call);
        if state.fail_on_call == Some(n) {
            return Err(IndexError::Backend(format!("injected failure on call {}", n)));
        }
        Ok(())
    }
}

impl IndexStore for InMemoryIndexStore {
    fn read(&self, identifier: &AppIdentifier) -> Result<IndexEntry, IndexError> {
        Ok(self
            .state
            .lock()
            .entries
            .get(identifier)
            .cloned()
            .unwrap_or_default())
    }

    fn append(
        &mut self,
        identifier: &AppIdentifier,
        seq: SequenceNumber,
    ) -> Result<(), IndexError> {
        self.record(IndexCall::Append {
            identifier: identifier.clone(),
            seq,
        })?;
        self.state
            .lock()
            .entries
            .entry(identifier.clone())
            .or_default()
            .push(seq);
        Ok(())
    }

    fn append_if_absent(
        &mut self,
        identifier: &AppIdentifier,
        seq: SequenceNumber,
    ) -> Result<bool, IndexError> {
        self.record(IndexCall::AppendIfAbsent {
            identifier: identifier.clone(),
            seq,
        })?;
        let mut state = self.state.lock();
        let entry = state.entries.entry(identifier.clone()).or_default();
        if entry.contains(seq) {
            return Ok(false);
        }
        entry.push(seq);
        Ok(true)
    }
}
