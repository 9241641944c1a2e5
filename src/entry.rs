//! The envelope persisted per cache write.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Wrapper around cached data, serialized as `{"timestamp": ..., "data": ...}`.
///
/// `timestamp` is milliseconds since the Unix epoch, captured when the entry
/// is built (write time, never read time). Every value a [`crate::CacheWriter`]
/// persists is exactly one of these; there is no other on-store shape.
///
/// Callers with optional payloads should use `Option<T>`; `None` is stored as
/// a JSON `null` in the `data` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// When the entry was written, in milliseconds since the epoch
    pub timestamp: i64,
    /// The cached data
    pub data: T,
}

impl<T> CacheEntry<T> {
    /// Builds an envelope around `data` stamped with the current wall-clock time.
    pub fn now(data: T) -> Self {
        Self {
            timestamp: Utc::now().timestamp_millis(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_serializes_with_exactly_two_fields() {
        let entry = CacheEntry {
            timestamp: 1_700_000_000_000,
            data: 7u32,
        };

        let json = serde_json::to_string(&entry).expect("Envelope should serialize");
        assert_eq!(json, r#"{"timestamp":1700000000000,"data":7}"#);
    }

    #[test]
    fn test_now_stamps_current_wall_clock_time() {
        let before = Utc::now().timestamp_millis();
        let entry = CacheEntry::now("payload");
        let after = Utc::now().timestamp_millis();

        assert!(entry.timestamp >= before, "Timestamp should not predate the call");
        assert!(entry.timestamp <= after, "Timestamp should not postdate the call");
    }

    #[test]
    fn test_none_data_serializes_as_null_sentinel() {
        let entry = CacheEntry {
            timestamp: 1,
            data: None::<String>,
        };

        let json = serde_json::to_string(&entry).expect("Envelope should serialize");
        assert_eq!(json, r#"{"timestamp":1,"data":null}"#);
    }
}
