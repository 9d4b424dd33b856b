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

//! Guarantee-timestamp derivation for reads.
//!
//! A read request carries a lower-bound "guarantee timestamp": the server
//! only has to make writes at or before that point visible. The sentinel
//! values below follow the Milvus wire convention.

use crate::tracker::TimestampTracker;
use crate::types::ConsistencyLevel;

/// Server resolves 0 to its latest timestamp (full strong read).
pub const STRONG_TS: u64 = 0;
/// Smallest valid timestamp; the server serves whatever it has.
pub const EVENTUALLY_TS: u64 = 1;
/// Tells the server to apply its configured bounded-staleness window.
pub const BOUNDED_TS: u64 = 2;

/// Picks the guarantee timestamp for a read on `collection`.
///
/// Only the Session level consults the tracker; a session read on a
/// collection this client never wrote degrades to an eventually read.
pub fn guarantee_timestamp(
    level: ConsistencyLevel,
    collection: &str,
    tracker: &TimestampTracker,
) -> u64 {
    match level {
        ConsistencyLevel::Strong => STRONG_TS,
        ConsistencyLevel::Bounded => BOUNDED_TS,
        ConsistencyLevel::Eventually => EVENTUALLY_TS,
        ConsistencyLevel::Session => tracker.get(collection).unwrap_or(EVENTUALLY_TS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_levels_ignore_tracker() {
        let tracker = TimestampTracker::new();
        tracker.update("c", 1234);
        assert_eq!(guarantee_timestamp(ConsistencyLevel::Strong, "c", &tracker), STRONG_TS);
        assert_eq!(guarantee_timestamp(ConsistencyLevel::Bounded, "c", &tracker), BOUNDED_TS);
        assert_eq!(
            guarantee_timestamp(ConsistencyLevel::Eventually, "c", &tracker),
            EVENTUALLY_TS
        );
    }

    #[test]
    fn test_session_uses_last_write() {
        let tracker = TimestampTracker::new();
        tracker.update("c", 1234);
        assert_eq!(guarantee_timestamp(ConsistencyLevel::Session, "c", &tracker), 1234);
    }

    #[test]
    fn test_session_without_writes_degrades_to_eventually() {
        let tracker = TimestampTracker::new();
        assert_eq!(
            guarantee_timestamp(ConsistencyLevel::Session, "never_written", &tracker),
            EVENTUALLY_TS
        );
    }
}
