use std::thread;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ttlkit::builder::TtlCacheBuilder;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ttlkit=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cache = TtlCacheBuilder::new(100)
        .default_ttl(Duration::from_millis(200))
        .cleanup_interval(Duration::from_millis(100))
        .try_build_concurrent::<String, String>()
        .unwrap();

    // Writers on several threads, sharing one cache.
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let cache = cache.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    cache.insert(format!("key_{}_{}", t, i), format!("value_{}", i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    println!("before expiry: size={}", cache.len());

    // Let the entries expire and the sweeper reclaim them without any reads.
    thread::sleep(Duration::from_millis(500));
    println!("after sweep:   size={}", cache.len());

    let snap = cache.stats_snapshot();
    println!(
        "expired_removals={} evictions={} hit_rate={:.2}",
        snap.expired_removals, snap.evictions, snap.hit_rate
    );

    cache.stop_sweeper();
}
