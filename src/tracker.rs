/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Per-client tracking of the last observed write timestamp per collection.
//!
//! Consulted when the consistency level is Session: a read passes the last
//! write timestamp of its target collection as the guarantee timestamp, so
//! the read observes at least this client's own prior writes. The tracker
//! is owned by the client object, not process-global, so two clients in one
//! process never see each other's session state.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

/// Concurrent map collection name -> highest write timestamp seen so far.
///
/// `update` is lock-free per entry; concurrent writers race through
/// `fetch_max`, never read-then-write.
#[derive(Debug, Default)]
pub struct TimestampTracker {
    entries: DashMap<String, AtomicU64>,
}

impl TimestampTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `ts` for `collection` if it is strictly greater than the
    /// stored value. Decreasing or equal timestamps are no-ops.
    pub fn update(&self, collection: &str, ts: u64) {
        if let Some(entry) = self.entries.get(collection) {
            entry.fetch_max(ts, Ordering::AcqRel);
            return;
        }
        // First write for this collection. entry() takes the shard lock, and
        // fetch_max afterwards settles any race with a concurrent first writer.
        self.entries
            .entry(collection.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_max(ts, Ordering::AcqRel);
    }

    /// Last known write timestamp, or `None` if this client has never
    /// written to the collection.
    pub fn get(&self, collection: &str) -> Option<u64> {
        self.entries
            .get(collection)
            .map(|entry| entry.load(Ordering::Acquire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_unknown_collection() {
        let tracker = TimestampTracker::new();
        assert_eq!(tracker.get("missing"), None);
    }

    #[test]
    fn test_monotonic_updates() {
        let tracker = TimestampTracker::new();
        tracker.update("c", 10);
        assert_eq!(tracker.get("c"), Some(10));
        // Stale and equal timestamps never regress the stored value.
        tracker.update("c", 5);
        assert_eq!(tracker.get("c"), Some(10));
        tracker.update("c", 10);
        assert_eq!(tracker.get("c"), Some(10));
        tracker.update("c", 20);
        assert_eq!(tracker.get("c"), Some(20));
    }

    #[test]
    fn test_collections_are_independent() {
        let tracker = TimestampTracker::new();
        tracker.update("a", 7);
        tracker.update("b", 3);
        assert_eq!(tracker.get("a"), Some(7));
        assert_eq!(tracker.get("b"), Some(3));
    }

    #[test]
    fn test_concurrent_updates_keep_maximum() {
        let tracker = Arc::new(TimestampTracker::new());
        let mut handles = Vec::new();
        for t in 0..8u64 {
            let tracker = Arc::clone(&tracker);
            handles.push(std::thread::spawn(move || {
                for ts in (t * 1000)..(t * 1000 + 1000) {
                    tracker.update("c", ts);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(tracker.get("c"), Some(7999));
    }
}
