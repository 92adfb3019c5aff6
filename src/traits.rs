//! # Cache Trait Hierarchy
//!
//! Trait seam over the TTL-LRU engine: universal operations, arbitrary
//! key-based removal, and the TTL/recency-specific operation set.
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) / is_empty(&) / capacity(&)     │
//!   │  clear(&mut)                            │
//!   └────────────────────┬────────────────────┘
//!                        │
//!                        ▼
//!   ┌─────────────────────────────────────────┐
//!   │           MutableCache<K, V>            │
//!   │                                         │
//!   │  remove(&K) → Option<V>                 │
//!   │  remove_batch(&[K]) → Vec<Option<V>>    │
//!   └────────────────────┬────────────────────┘
//!                        │
//!                        ▼
//!   ┌─────────────────────────────────────────┐
//!   │         TtlLruCacheTrait<K, V>          │
//!   │                                         │
//!   │  pop_lru() → (K, V)                     │
//!   │  peek_lru() → (&K, &V)                  │
//!   │  touch(&K) → bool                       │
//!   │  expires_in(&K) → Option<Duration>      │
//!   │  age(&K) → Option<Duration>             │
//!   │  remove_expired() → usize               │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! | Trait              | Extends        | Purpose                              |
//! |--------------------|----------------|--------------------------------------|
//! | `CoreCache`        | -              | Universal cache operations           |
//! | `MutableCache`     | `CoreCache`    | Adds arbitrary key removal           |
//! | `TtlLruCacheTrait` | `MutableCache` | Recency eviction + TTL introspection |
//!
//! Every read-style operation in this hierarchy is expiry-aware: an entry
//! whose deadline has passed is reported absent, never returned stale.

use std::time::Duration;

/// Universal operations all caches must support.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use ttlkit::policy::ttl_lru::TtlLruCore;
/// use ttlkit::traits::CoreCache;
///
/// fn warm_cache<C: CoreCache<u64, Arc<String>>>(cache: &mut C, data: &[(u64, &str)]) {
///     for (key, value) in data {
///         cache.insert(*key, Arc::new(value.to_string()));
///     }
/// }
///
/// let mut cache = TtlLruCore::try_new(100, Duration::from_secs(300)).unwrap();
/// warm_cache(&mut cache, &[(1, "one"), (2, "two")]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// If the cache is at capacity and the key is new, the least recently
    /// used entry is evicted first. Overwriting an existing key never evicts.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a live value by key, refreshing its recency.
    ///
    /// An entry whose TTL has elapsed is removed on the spot and reported
    /// absent. Use [`contains`](Self::contains) to check existence without
    /// affecting eviction order.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks if a live (non-expired) entry exists without updating access
    /// state or statistics.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries, including expired entries that
    /// have not yet been removed by a read or a sweep.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum capacity of the cache.
    fn capacity(&self) -> usize;

    /// Removes all entries. Cumulative statistics are not reset.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use ttlkit::policy::ttl_lru::TtlLruCore;
/// use ttlkit::traits::{CoreCache, MutableCache};
///
/// let mut cache = TtlLruCore::try_new(10, Duration::from_secs(300)).unwrap();
/// cache.insert(1, Arc::new("value"));
///
/// assert_eq!(cache.remove(&1).as_deref(), Some(&"value"));
/// assert_eq!(cache.remove(&1), None); // Already removed
/// ```
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a specific key-value pair.
    ///
    /// Returns the removed value if the key existed, or `None` if it didn't.
    /// Removal via this path counts as neither an eviction nor an expiry.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes multiple keys, returning the removed values in input order.
    ///
    /// The default implementation loops over [`remove`](Self::remove).
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|key| self.remove(key)).collect()
    }
}

/// Recency eviction and TTL introspection for the TTL-LRU policy.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use ttlkit::policy::ttl_lru::TtlLruCore;
/// use ttlkit::traits::{CoreCache, TtlLruCacheTrait};
///
/// let mut cache = TtlLruCore::try_new(10, Duration::from_secs(300)).unwrap();
/// cache.insert(1, Arc::new("oldest"));
/// cache.insert(2, Arc::new("newest"));
///
/// let (key, value) = cache.pop_lru().unwrap();
/// assert_eq!(key, 1);
/// assert_eq!(*value, "oldest");
/// ```
pub trait TtlLruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used live entry.
    ///
    /// Expired entries encountered at the LRU end are discarded (counted as
    /// expired removals) rather than returned.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Returns the least recently used live entry without removing it or
    /// affecting recency order. Expired entries are skipped, not removed.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Moves a live entry to the most recently used position without
    /// retrieving it. An expired entry is removed and `false` is returned.
    fn touch(&mut self, key: &K) -> bool;

    /// Returns the remaining validity of a live entry, or `None` if the key
    /// is absent or already expired.
    fn expires_in(&self, key: &K) -> Option<Duration>;

    /// Returns the time since a live entry was created or last overwritten,
    /// or `None` if the key is absent or already expired.
    fn age(&self, key: &K) -> Option<Duration>;

    /// Removes every expired entry in one pass, returning the removal count.
    ///
    /// Each removal increments the `expired_removals` counter. This is the
    /// same pass the background sweeper runs; lazy expiry on `get` remains
    /// the correctness backstop when no sweep runs.
    fn remove_expired(&mut self) -> usize;
}
