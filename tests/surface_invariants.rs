// ==============================================
// CROSS-SURFACE INVARIANT TESTS (integration)
// ==============================================
//
// Tests that verify behavioral consistency across the library's public
// surfaces (core, concurrent wrapper, builder). These span multiple modules
// and belong here rather than in any single source file.

use std::sync::Arc;
use std::time::Duration;

use ttlkit::builder::TtlCacheBuilder;
use ttlkit::policy::ttl_lru::{ConcurrentTtlLruCache, TtlLruCore};
use ttlkit::traits::CoreCache;

const TTL: Duration = Duration::from_secs(300);

// ==============================================
// Configuration validation is uniform
// ==============================================
//
// Every construction path must reject the same invalid parameters with the
// same error vocabulary; none may silently coerce a zero to a default.

#[test]
fn zero_capacity_rejected_everywhere() {
    let core_err = TtlLruCore::<u64, u64>::try_new(0, TTL).unwrap_err();
    let concurrent_err = ConcurrentTtlLruCache::<u64, u64>::try_new(0, TTL).unwrap_err();
    let builder_err = TtlCacheBuilder::new(0).try_build::<u64, u64>().unwrap_err();

    for err in [core_err, concurrent_err, builder_err] {
        assert!(
            err.to_string().contains("capacity"),
            "expected a capacity error, got: {}",
            err
        );
    }
}

#[test]
fn zero_default_ttl_rejected_everywhere() {
    let core_err = TtlLruCore::<u64, u64>::try_new(10, Duration::ZERO).unwrap_err();
    let concurrent_err =
        ConcurrentTtlLruCache::<u64, u64>::try_new(10, Duration::ZERO).unwrap_err();
    let builder_err = TtlCacheBuilder::new(10)
        .default_ttl(Duration::ZERO)
        .try_build::<u64, u64>()
        .unwrap_err();

    for err in [core_err, concurrent_err, builder_err] {
        assert!(
            err.to_string().contains("default_ttl"),
            "expected a default_ttl error, got: {}",
            err
        );
    }
}

// ==============================================
// Capacity reporting is consistent
// ==============================================

#[test]
fn capacity_is_honored_not_coerced() {
    let core = TtlLruCore::<u64, u64>::try_new(1, TTL).unwrap();
    assert_eq!(core.capacity(), 1);

    let cache = TtlCacheBuilder::new(1)
        .cleanup_interval(Duration::from_secs(3600))
        .try_build_concurrent::<u64, u64>()
        .unwrap();
    assert_eq!(cache.capacity(), 1);

    cache.insert(1, 1);
    cache.insert(2, 2);
    assert_eq!(cache.len(), 1);
    assert!(cache.contains(&2));
}

// ==============================================
// Core and concurrent wrapper agree on semantics
// ==============================================

#[test]
fn eviction_order_matches_across_surfaces() {
    let mut core = TtlLruCore::<u64, u64>::try_new(2, TTL).unwrap();
    let concurrent = ConcurrentTtlLruCache::<u64, u64>::try_with_cleanup_interval(
        2,
        TTL,
        Duration::from_secs(3600),
    )
    .unwrap();

    for i in 0..3 {
        core.insert(i, Arc::new(i));
        concurrent.insert(i, i);
    }

    assert_eq!(core.contains(&0), concurrent.contains(&0));
    assert_eq!(core.contains(&1), concurrent.contains(&1));
    assert_eq!(core.contains(&2), concurrent.contains(&2));
    assert!(!concurrent.contains(&0));
}

#[test]
fn stats_snapshots_have_identical_shape() {
    let mut core = TtlLruCore::<u64, u64>::try_new(4, TTL).unwrap();
    let concurrent = ConcurrentTtlLruCache::<u64, u64>::try_with_cleanup_interval(
        4,
        TTL,
        Duration::from_secs(3600),
    )
    .unwrap();

    core.insert(1, Arc::new(1));
    concurrent.insert(1, 1);
    core.get(&1);
    concurrent.get(&1);
    core.get(&9);
    concurrent.get(&9);

    let a = core.stats_snapshot();
    let b = concurrent.stats_snapshot();

    assert_eq!(a.hits, b.hits);
    assert_eq!(a.misses, b.misses);
    assert_eq!(a.total_requests, b.total_requests);
    assert_eq!(a.current_size, b.current_size);
    assert_eq!(a.capacity, b.capacity);
}
