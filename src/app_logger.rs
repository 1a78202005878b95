//! Activity log ring buffer.
//!
//! Keeps the add-on's recent activity (panel transitions, degraded paths,
//! persistence failures) in a fixed-capacity circular buffer the host
//! application can query and render in its own log view. Entries carry
//! monotonic IDs so the host can poll incrementally.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;

/// Default capacity used by [`shared`].
pub const LOG_RING_CAPACITY: usize = 200;

/// One structured activity entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub timestamp_ms: i64,
    pub level: String,
    pub source: String,
    pub message: String,
}

/// Fixed-capacity circular buffer of [`LogEntry`] values.
pub struct LogRingBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    /// Monotonically increasing ID for the next entry.
    next_id: u64,
}

/// Handle shared between the controller and the store's background writes.
pub type SharedLog = Arc<Mutex<LogRingBuffer>>;

/// New shared buffer at the default capacity.
pub fn shared() -> SharedLog {
    Arc::new(Mutex::new(LogRingBuffer::new(LOG_RING_CAPACITY)))
}

impl LogRingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Push a new entry, dropping the oldest when full. Returns the
    /// assigned entry ID.
    pub fn push(&mut self, level: &str, source: &str, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            id,
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
            level: level.to_string(),
            source: source.to_string(),
            message,
        });

        id
    }

    /// Entries in chronological order (oldest first). A nonzero `limit`
    /// returns only the most recent `limit` entries.
    pub fn entries(&self, limit: usize) -> Vec<LogEntry> {
        let take = if limit == 0 {
            self.entries.len()
        } else {
            limit.min(self.entries.len())
        };
        let skip = self.entries.len() - take;
        self.entries.iter().skip(skip).cloned().collect()
    }

    /// Remove all entries. IDs stay monotonic across a clear.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_monotonic_ids() {
        let mut buf = LogRingBuffer::new(10);
        assert_eq!(buf.push("info", "controller", "first".into()), 1);
        assert_eq!(buf.push("warn", "store", "second".into()), 2);
        assert_eq!(buf.push("error", "store", "third".into()), 3);
    }

    #[test]
    fn entries_come_back_in_chronological_order() {
        let mut buf = LogRingBuffer::new(10);
        buf.push("info", "controller", "first".into());
        buf.push("info", "controller", "second".into());
        buf.push("info", "controller", "third".into());

        let entries = buf.entries(0);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[2].message, "third");
    }

    #[test]
    fn limit_returns_most_recent_entries() {
        let mut buf = LogRingBuffer::new(10);
        buf.push("info", "controller", "a".into());
        buf.push("info", "controller", "b".into());
        buf.push("info", "controller", "c".into());

        let entries = buf.entries(2);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "b");
        assert_eq!(entries[1].message, "c");
    }

    #[test]
    fn ring_drops_oldest_when_full() {
        let mut buf = LogRingBuffer::new(3);
        for msg in ["a", "b", "c", "d"] {
            buf.push("info", "controller", msg.into());
        }
        assert_eq!(buf.len(), 3);
        let entries = buf.entries(0);
        assert_eq!(entries[0].message, "b");
        assert_eq!(entries[2].message, "d");
    }

    #[test]
    fn clear_keeps_ids_monotonic() {
        let mut buf = LogRingBuffer::new(10);
        buf.push("info", "controller", "a".into());
        buf.push("info", "controller", "b".into());
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.push("info", "controller", "after".into()), 3);
    }

    #[test]
    fn limit_larger_than_count_returns_everything() {
        let mut buf = LogRingBuffer::new(10);
        buf.push("info", "controller", "only".into());
        assert_eq!(buf.entries(100).len(), 1);
    }

    #[test]
    fn entry_fields_are_recorded() {
        let mut buf = LogRingBuffer::new(10);
        buf.push("warn", "store", "persist failed".into());
        let entry = &buf.entries(0)[0];
        assert_eq!(entry.id, 1);
        assert_eq!(entry.level, "warn");
        assert_eq!(entry.source, "store");
        assert_eq!(entry.message, "persist failed");
        assert!(entry.timestamp_ms > 0);
    }
}
