//! Instance-owned cache statistics.
//!
//! Each cache instance owns one [`CacheStats`] record; counters are mutated
//! only while the cache's guard is held, so no atomics are needed.
//! [`CacheStatsSnapshot`] is a plain-data copy taken under the guard,
//! consistent at the instant of the call.
//!
//! | Counter            | Incremented by                                   |
//! |--------------------|--------------------------------------------------|
//! | `hits`             | `get` on a live entry                            |
//! | `misses`           | `get` on an absent or expired entry              |
//! | `evictions`        | LRU eviction during an over-capacity insert      |
//! | `expired_removals` | lazy expiry on access, or the proactive sweep    |
//!
//! All counters are monotonic for the lifetime of the cache; `clear()` does
//! not reset them.

/// Monotonic usage counters owned by a single cache instance.
#[derive(Debug, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expired_removals: u64,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    #[inline]
    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    #[inline]
    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    #[inline]
    pub(crate) fn record_expired_removal(&mut self) {
        self.expired_removals += 1;
    }

    /// Builds a snapshot, attaching the gauges captured at snapshot time.
    pub(crate) fn snapshot(&self, current_size: usize, capacity: usize) -> CacheStatsSnapshot {
        let total_requests = self.hits + self.misses;
        let hit_rate = if total_requests == 0 {
            0.0
        } else {
            self.hits as f64 / total_requests as f64
        };

        CacheStatsSnapshot {
            hits: self.hits,
            misses: self.misses,
            total_requests,
            hit_rate,
            evictions: self.evictions,
            expired_removals: self.expired_removals,
            current_size,
            capacity,
        }
    }
}

/// Point-in-time view of a cache's counters and gauges.
///
/// `total_requests == hits + misses` and `hit_rate == hits / total_requests`
/// (defined as `0.0` when no requests have been made).
#[derive(Debug, Default, Clone, Copy)]
pub struct CacheStatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub total_requests: u64,
    /// Fraction of requests served from the cache, in `[0.0, 1.0]`.
    pub hit_rate: f64,
    pub evictions: u64,
    pub expired_removals: u64,

    // gauges captured at snapshot time
    pub current_size: usize,
    pub capacity: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stats_are_zeroed() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.expired_removals, 0);
    }

    #[test]
    fn recorders_increment_counters() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        stats.record_eviction();
        stats.record_expired_removal();

        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.expired_removals, 1);
    }

    #[test]
    fn snapshot_derives_totals_and_rate() {
        let mut stats = CacheStats::new();
        for _ in 0..3 {
            stats.record_hit();
        }
        stats.record_miss();

        let snap = stats.snapshot(2, 10);
        assert_eq!(snap.total_requests, 4);
        assert!((snap.hit_rate - 0.75).abs() < f64::EPSILON);
        assert_eq!(snap.current_size, 2);
        assert_eq!(snap.capacity, 10);
    }

    #[test]
    fn snapshot_with_no_requests_has_zero_rate() {
        let stats = CacheStats::new();
        let snap = stats.snapshot(0, 5);
        assert_eq!(snap.total_requests, 0);
        assert_eq!(snap.hit_rate, 0.0);
    }
}
