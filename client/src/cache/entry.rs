use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::Timestamp;

/// A cached value and the time it was fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<V> {
    pub data: V,
    pub timestamp: Timestamp,
}

impl<V> CacheEntry<V> {
    pub fn new(data: V, timestamp: Timestamp) -> Self {
        Self { data, timestamp }
    }

    /// Valid while strictly less than `ttl` has passed since the fetch
    pub fn is_valid(&self, now: Timestamp, ttl: Duration) -> bool {
        now.since(self.timestamp) < ttl
    }

    pub fn age(&self, now: Timestamp) -> Duration {
        now.since(self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_until_ttl() {
        let ttl = Duration::from_secs(60);
        let entry = CacheEntry::new("x", Timestamp(1_000));

        assert!(entry.is_valid(Timestamp(1_000), ttl));
        assert!(entry.is_valid(Timestamp(60_999), ttl));
        assert!(!entry.is_valid(Timestamp(61_000), ttl));
        assert!(!entry.is_valid(Timestamp(61_001), ttl));
    }

    #[test]
    fn test_serialized_shape() {
        let entry = CacheEntry::new(7u32, Timestamp(123));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!({"data": 7, "timestamp": 123}));
    }
}
