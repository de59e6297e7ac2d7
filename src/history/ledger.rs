use std::collections::VecDeque;

use uuid::Uuid;

use super::types::HistoryRecord;

/// Maximum number of records the ledger retains.
pub const CAPACITY: usize = 50;

/// Insertion-ordered, bounded store of calculation records.
///
/// Oldest records sit at the front; appending past capacity evicts from the
/// front first. The ledger lives and dies with the session, nothing is
/// persisted.
#[derive(Debug, Default)]
pub struct HistoryLedger {
    records: VecDeque<HistoryRecord>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
        }
    }

    /// Append a record, evicting the oldest entries while over capacity.
    pub fn append(&mut self, record: HistoryRecord) {
        self.records.push_back(record);
        while self.records.len() > CAPACITY {
            self.records.pop_front();
        }
    }

    /// Remove the record with the given id, keeping the order of the rest.
    /// No-op when no record matches.
    pub fn remove(&mut self, id: &Uuid) {
        if let Some(pos) = self.records.iter().position(|r| r.id == *id) {
            self.records.remove(pos);
        }
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// All records, oldest first. Presentation layers reverse this for
    /// most-recent-first display.
    pub fn records(&self) -> impl DoubleEndedIterator<Item = &HistoryRecord> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
