// ==============================================
// EXPIRY AND STATS BEHAVIOR TESTS (integration)
// ==============================================
//
// End-to-end TTL semantics through the public concurrent surface: lazy
// expiry on read, the background sweep, and the statistics contract.

use std::thread;
use std::time::Duration;

use ttlkit::builder::TtlCacheBuilder;
use ttlkit::policy::ttl_lru::ConcurrentTtlLruCache;

const LONG_TTL: Duration = Duration::from_secs(3600);
const LONG_INTERVAL: Duration = Duration::from_secs(3600);

#[test]
fn test_lazy_expiry_wins_without_sweep() {
    // Sweep effectively disabled; the lazy check alone must keep reads correct.
    let cache: ConcurrentTtlLruCache<&str, &str> =
        ConcurrentTtlLruCache::try_with_cleanup_interval(10, LONG_TTL, LONG_INTERVAL).unwrap();

    cache
        .insert_with_ttl("k", "v", Duration::from_millis(20))
        .unwrap();
    thread::sleep(Duration::from_millis(80));

    assert!(cache.get(&"k").is_none());

    let snap = cache.stats_snapshot();
    assert_eq!(snap.expired_removals, 1);
    assert_eq!(snap.misses, 1);
    assert_eq!(snap.hits, 0);
    assert_eq!(snap.current_size, 0);
}

#[test]
fn test_background_sweep_removes_unaccessed_entries() {
    let cache = TtlCacheBuilder::new(32)
        .default_ttl(Duration::from_millis(25))
        .cleanup_interval(Duration::from_millis(10))
        .try_build_concurrent::<u64, String>()
        .unwrap();

    for i in 0..8 {
        cache.insert(i, format!("value_{}", i));
    }

    // No reads at all; only the sweeper can reclaim these.
    thread::sleep(Duration::from_millis(200));

    assert_eq!(cache.len(), 0);
    let snap = cache.stats_snapshot();
    assert_eq!(snap.expired_removals, 8);
    assert_eq!(snap.hits, 0);
    assert_eq!(snap.misses, 0);
}

#[test]
fn test_sweep_and_lazy_check_never_double_count() {
    let cache = TtlCacheBuilder::new(32)
        .default_ttl(Duration::from_millis(25))
        .cleanup_interval(Duration::from_millis(10))
        .try_build_concurrent::<u64, u64>()
        .unwrap();

    for i in 0..10 {
        cache.insert(i, i);
    }

    thread::sleep(Duration::from_millis(200));
    // Sweep already ran; these gets must find nothing left to remove.
    for i in 0..10 {
        assert!(cache.get(&i).is_none());
    }

    let snap = cache.stats_snapshot();
    assert_eq!(snap.expired_removals, 10);
    assert_eq!(snap.misses, 10);
}

#[test]
fn test_per_call_ttl_overrides_default() {
    let cache: ConcurrentTtlLruCache<&str, u32> =
        ConcurrentTtlLruCache::try_with_cleanup_interval(10, LONG_TTL, LONG_INTERVAL).unwrap();

    cache
        .insert_with_ttl("short", 1, Duration::from_millis(20))
        .unwrap();
    cache.insert("long", 2);

    thread::sleep(Duration::from_millis(80));

    assert!(cache.get(&"short").is_none());
    assert_eq!(*cache.get(&"long").unwrap(), 2);
}

#[test]
fn test_zero_ttl_rejected_through_concurrent_surface() {
    let cache: ConcurrentTtlLruCache<&str, u32> =
        ConcurrentTtlLruCache::try_with_cleanup_interval(10, LONG_TTL, LONG_INTERVAL).unwrap();

    let err = cache.insert_with_ttl("k", 1, Duration::ZERO).unwrap_err();
    assert!(err.to_string().contains("ttl"));
    assert!(cache.is_empty());
}

#[test]
fn test_stopped_sweeper_still_expires_lazily() {
    let cache = TtlCacheBuilder::new(10)
        .default_ttl(Duration::from_millis(20))
        .cleanup_interval(Duration::from_millis(10))
        .try_build_concurrent::<u64, u64>()
        .unwrap();

    cache.stop_sweeper();
    cache.insert(1, 1);

    thread::sleep(Duration::from_millis(80));

    // The sweeper is gone, but reads still never observe expired data.
    assert_eq!(cache.len(), 1);
    assert!(cache.get(&1).is_none());
    assert_eq!(cache.stats_snapshot().expired_removals, 1);
}

#[test]
fn test_hit_rate_tracks_request_mix() {
    let cache: ConcurrentTtlLruCache<u64, u64> =
        ConcurrentTtlLruCache::try_with_cleanup_interval(16, LONG_TTL, LONG_INTERVAL).unwrap();

    for i in 0..8 {
        cache.insert(i, i);
    }

    for i in 0..8 {
        assert!(cache.get(&i).is_some()); // 8 hits
    }
    for i in 100..104 {
        assert!(cache.get(&i).is_none()); // 4 misses
    }

    let snap = cache.stats_snapshot();
    assert_eq!(snap.hits, 8);
    assert_eq!(snap.misses, 4);
    assert_eq!(snap.total_requests, 12);
    assert!((snap.hit_rate - 8.0 / 12.0).abs() < 1e-9);
}

#[test]
fn test_eviction_and_expiry_counters_are_distinct() {
    let cache: ConcurrentTtlLruCache<u64, u64> =
        ConcurrentTtlLruCache::try_with_cleanup_interval(2, LONG_TTL, LONG_INTERVAL).unwrap();

    cache.insert(1, 1);
    cache.insert(2, 2);
    cache.insert(3, 3); // evicts key 1

    cache
        .insert_with_ttl(4, 4, Duration::from_millis(20))
        .unwrap(); // evicts key 2
    thread::sleep(Duration::from_millis(80));
    assert!(cache.get(&4).is_none()); // expired, not evicted

    let snap = cache.stats_snapshot();
    assert_eq!(snap.evictions, 2);
    assert_eq!(snap.expired_removals, 1);
}

#[test]
fn test_recency_refresh_through_concurrent_surface() {
    let cache: ConcurrentTtlLruCache<&str, u32> =
        ConcurrentTtlLruCache::try_with_cleanup_interval(2, LONG_TTL, LONG_INTERVAL).unwrap();

    cache.insert("a", 1);
    cache.insert("b", 2);
    assert!(cache.get(&"a").is_some()); // "a" becomes MRU

    cache.insert("c", 3); // evicts "b"

    assert!(cache.contains(&"a"));
    assert!(!cache.contains(&"b"));
    assert!(cache.contains(&"c"));
}

#[test]
fn test_clear_resets_content_but_not_counters() {
    let cache: ConcurrentTtlLruCache<u64, u64> =
        ConcurrentTtlLruCache::try_with_cleanup_interval(10, LONG_TTL, LONG_INTERVAL).unwrap();

    cache.insert(1, 1);
    assert!(cache.get(&1).is_some());
    assert!(cache.get(&2).is_none());

    cache.clear();

    assert_eq!(cache.len(), 0);
    assert!(cache.get(&1).is_none());

    let snap = cache.stats_snapshot();
    assert_eq!(snap.hits, 1);
    assert_eq!(snap.misses, 2);
    assert_eq!(snap.current_size, 0);
}
