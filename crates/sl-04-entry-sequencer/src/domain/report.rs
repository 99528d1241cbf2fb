//! Outcome of a sequencing run.

use shared_types::SequenceNumber;
use std::fmt;

/// What happened to one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencedEntry {
    pub name: String,
    pub sequence_number: SequenceNumber,
    pub is_duplicate: bool,
    /// The index was written for this entry.
    pub indexed: bool,
}

impl SequencedEntry {
    /// `"<seq>: <name>"`, with `" (dupe)"` appended for duplicates.
    pub fn log_line(&self) -> String {
        let mut line = format!("{}: {}", self.sequence_number, self.name);
        if self.is_duplicate {
            line.push_str(" (dupe)");
        }
        line
    }
}

/// Entries of a run in resolution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceReport {
    /// Log size the store was opened at.
    pub checkpoint_size: u64,
    pub entries: Vec<SequencedEntry>,
}

impl SequenceReport {
    pub fn new(checkpoint_size: u64) -> Self {
        Self {
            checkpoint_size,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: SequencedEntry) {
        self.entries.push(entry);
    }

    pub fn new_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_duplicate).count()
    }

    pub fn duplicate_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_duplicate).count()
    }

    pub fn indexed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.indexed).count()
    }

    pub fn sequence_numbers(&self) -> Vec<SequenceNumber> {
        self.entries.iter().map(|e| e.sequence_number).collect()
    }
}

impl fmt::Display for SequenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries: {} new, {} duplicates, {} indexed",
            self.entries.len(),
            self.new_count(),
            self.duplicate_count(),
            self.indexed_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(seq: u64, dupe: bool, indexed: bool) -> SequencedEntry {
        SequencedEntry {
            name: format!("e{}", seq),
            sequence_number: seq,
            is_duplicate: dupe,
            indexed,
        }
    }

    #[test]
    fn test_log_line() {
        assert_eq!(entry(3, false, false).log_line(), "3: e3");
        assert_eq!(entry(3, true, false).log_line(), "3: e3 (dupe)");
    }

    #[test]
    fn test_counters() {
        let mut report = SequenceReport::new(7);
        report.push(entry(7, false, true));
        report.push(entry(8, false, false));
        report.push(entry(7, true, false));

        assert_eq!(report.new_count(), 2);
        assert_eq!(report.duplicate_count(), 1);
        assert_eq!(report.indexed_count(), 1);
        assert_eq!(report.sequence_numbers(), vec![7, 8, 7]);
        assert_eq!(report.to_string(), "3 entries: 2 new, 1 duplicates, 1 indexed");
    }
}
