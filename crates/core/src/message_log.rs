//! Bounded message log shown in the corner of the play screen.

use arrayvec::ArrayVec;

use crate::types::MESSAGE_LOG_CAPACITY;

/// Keeps the most recent messages, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    entries: ArrayVec<String, MESSAGE_LOG_CAPACITY>,
    /// Messages pushed since the last clear, evicted ones included.
    total: u64,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("log: {message}");
        if self.entries.is_full() {
            self.entries.remove(0);
        }
        self.entries.push(message);
        self.total += 1;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.total = 0;
    }

    /// Oldest to newest.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}
