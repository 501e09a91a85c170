//! Bounded recency list of past rolls, newest first.
//!
//! Strict recency window: a push goes to the head and anything past capacity
//! falls off the tail. Duplicates are kept; rolling the same creature twice
//! produces two entries.

use std::collections::VecDeque;

use super::record::DisplayRecord;

/// Number of past rolls kept by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

#[derive(Debug, Clone)]
pub struct HistoryRing {
    entries: VecDeque<DisplayRecord>,
    capacity: usize,
}

impl Default for HistoryRing {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryRing {
    /// A capacity of zero is bumped to one so the latest roll is always kept.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Prepend `record`, evicting the oldest entry once over capacity.
    pub fn push(&mut self, record: DisplayRecord) {
        self.entries.push_front(record);
        self.entries.truncate(self.capacity);
    }

    /// Head to tail: most recent roll first.
    pub fn iter(&self) -> impl Iterator<Item = &DisplayRecord> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&DisplayRecord> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
