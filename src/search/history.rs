use std::collections::VecDeque;

use crate::constants::search::DEFAULT_HISTORY_LIMIT;

/// Most-recent-first list of distinct, non-blank queries.
#[derive(Debug, Clone)]
pub struct SearchHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_LIMIT)
    }
}

impl SearchHistory {
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Moves `query` to the front, inserting it if new. Blank input is ignored.
    pub fn record(&mut self, query: &str) {
        if query.trim().is_empty() {
            return;
        }

        if let Some(pos) = self.entries.iter().position(|entry| entry == query) {
            self.entries.remove(pos);
        }

        self.entries.push_front(query.to_string());
        self.entries.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
