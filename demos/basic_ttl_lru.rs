use std::sync::Arc;
use std::time::Duration;

use ttlkit::policy::ttl_lru::TtlLruCore;
use ttlkit::traits::{CoreCache, MutableCache};

fn main() {
    let mut cache: TtlLruCore<u32, String> =
        TtlLruCore::try_new(2, Duration::from_secs(300)).unwrap();

    cache.insert(1, Arc::new("alpha".to_string()));
    cache.insert(2, Arc::new("beta".to_string()));

    if let Some(value) = cache.get(&1) {
        println!("hit 1: {}", value.as_str());
    }

    cache.insert(3, Arc::new("gamma".to_string()));

    println!("contains 2? {}", cache.contains(&2));

    cache.remove(&3);
    let snap = cache.stats_snapshot();
    println!(
        "hits={} misses={} evictions={} size={}/{}",
        snap.hits, snap.misses, snap.evictions, snap.current_size, snap.capacity
    );
}

// Expected output:
// hit 1: alpha
// contains 2? false
// hits=1 misses=0 evictions=1 size=1/2
//
// Explanation: capacity=2; after get(&1), key 1 is MRU and key 2 is LRU.
// Inserting key 3 evicts key 2, so contains(2) is false.
