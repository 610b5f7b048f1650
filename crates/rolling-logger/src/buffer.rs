//! Circular log buffer

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::Level;

#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    /// Message followed by `key=value` fields
    pub message: String,
}

impl LogRecord {
    /// `2024-01-02T03:04:05.000Z INFO  goal_core::store: created goal`
    pub fn format_line(&self) -> String {
        format!(
            "{} {:<5} {}: {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.level.to_string(),
            self.target,
            self.message
        )
    }
}

/// Shared, bounded buffer of recent records. Clones share storage.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    records: Arc<Mutex<VecDeque<LogRecord>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&self, record: LogRecord) {
        let mut records = self.lock();
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(record);
    }

    /// Oldest-first copy of the buffered records
    pub fn recent(&self) -> Vec<LogRecord> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panic while holding the lock leaves the deque intact; keep using it.
    fn lock(&self) -> MutexGuard<'_, VecDeque<LogRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(message: &str) -> LogRecord {
        LogRecord {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            level: Level::INFO,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_evicts_oldest() {
        let buffer = LogBuffer::new(3);
        for i in 0..5 {
            buffer.push(record(&format!("line {}", i)));
        }

        let messages: Vec<_> = buffer.recent().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["line 2", "line 3", "line 4"]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let buffer = LogBuffer::new(0);
        buffer.push(record("a"));
        buffer.push(record("b"));
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.recent()[0].message, "b");
    }

    #[test]
    fn test_clones_share_storage() {
        let buffer = LogBuffer::new(10);
        let handle = buffer.clone();
        buffer.push(record("shared"));
        assert_eq!(handle.len(), 1);

        handle.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            record("hello").format_line(),
            "2024-01-02T03:04:05.000Z INFO  test: hello"
        );
    }
}
