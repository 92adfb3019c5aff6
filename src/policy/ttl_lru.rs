//! # TTL-bounded LRU Cache
//!
//! Combined size-bounded / time-bounded cache: LRU eviction keeps the entry
//! count at or below capacity, per-entry TTL deadlines invalidate stale data,
//! and a background sweeper (see [`crate::sweep`]) bounds how long expired
//! entries can linger unaccessed.
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────────┐
//!   │                 ConcurrentTtlLruCache<K, V>                    │
//!   │                                                                │
//!   │   Arc<RwLock<TtlLruCore<K, V>>>        Arc<SweepHandle>        │
//!   │                │                             │                 │
//!   │                ▼                             ▼                 │
//!   │   ┌──────────────────────────┐   ┌────────────────────────┐    │
//!   │   │     TtlLruCore<K, V>     │◄──┤ sweeper thread (Weak)  │    │
//!   │   │                          │   │ remove_expired() every │    │
//!   │   │  FxHashMap<K, NonNull>   │   │ cleanup_interval       │    │
//!   │   │                          │   └────────────────────────┘    │
//!   │   │  head ─► [MRU] ◄─► [..]  │                                 │
//!   │   │            ◄─► [LRU] ◄─ tail                               │
//!   │   │                          │                                 │
//!   │   │  CacheStats (hits, ...)  │                                 │
//!   │   └──────────────────────────┘                                 │
//!   └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! | Component                | Description                                     |
//! |--------------------------|-------------------------------------------------|
//! | `TtlLruCore<K, V>`       | Single-threaded core: index + recency list      |
//! | `ConcurrentTtlLruCache`  | Thread-safe wrapper with `parking_lot::RwLock`  |
//! | `Node<K, V>`             | List node: key, `Arc<V>`, expiry deadline       |
//! | `CacheStats`             | Instance-owned hit/miss/eviction counters       |
//! | `SweepHandle`            | Cancellable background expiry sweeper           |
//!
//! ## Operations Flow
//!
//! ```text
//!   INSERT new key (cache full, capacity = 3)
//!   ═══════════════════════════════════════════════════════════════
//!     head ──► [A] ◄──► [B] ◄──► [C] ◄── tail
//!
//!   insert(D):  1. evict [C] from tail       (evictions += 1)
//!               2. attach [D] at head with expires_at = now + ttl
//!
//!     head ──► [D] ◄──► [A] ◄──► [B] ◄── tail
//!
//!   GET on an expired entry
//!   ═══════════════════════════════════════════════════════════════
//!   get(B), B.expires_at <= now:
//!     1. unlink [B] from list and index     (expired_removals += 1)
//!     2. report absent                      (misses += 1)
//!
//!   An expired-but-unswept entry is never observed as a hit; the lazy
//!   check on every read is the correctness backstop, the sweep is only
//!   a memory-bound optimization.
//! ```
//!
//! ## Invariants
//!
//! - Index key set and list key set are identical after every operation.
//! - `len() <= capacity` after every write; eviction runs synchronously
//!   before the new entry is linked in.
//! - Every key appears exactly once in the recency list.
//! - No read returns a value whose `expires_at` is in the past.
//!
//! ## Concurrency Model
//!
//! A single coarse guard protects index + list + stats. `get` takes the
//! write lock (it refreshes recency and may remove an expired entry);
//! `peek`/`contains`/`len`/`stats_snapshot` take the read lock and never
//! mutate. Operations are linearizable in lock-acquisition order. The
//! sweeper acquires the same write lock for each pass and holds only a
//! `Weak` reference between passes.
//!
//! ## Thread Safety
//!
//! - `TtlLruCore`: **NOT thread-safe** - single-threaded only
//! - `ConcurrentTtlLruCache`: **Thread-safe** via `parking_lot::RwLock`
//! - Values: `Arc<V>` enables safe sharing across threads after retrieval

use std::fmt;
use std::hash::Hash;
use std::ptr::NonNull;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::error::{ConfigError, InvariantError};
use crate::stats::{CacheStats, CacheStatsSnapshot};
use crate::sweep::{self, SweepHandle, DEFAULT_CLEANUP_INTERVAL};
use crate::traits::{CoreCache, MutableCache, TtlLruCacheTrait};

/// Node in the recency linked list.
///
/// Layout keeps the list pointers first for traversal, followed by the key
/// (needed for index removal during eviction) and the expiry metadata
/// checked on every read.
#[repr(C)]
struct Node<K, V> {
    prev: Option<NonNull<Node<K, V>>>,
    next: Option<NonNull<Node<K, V>>>,
    key: K,
    value: Arc<V>,
    expires_at: Instant,
    created_at: Instant,
}

impl<K, V> Node<K, V> {
    #[inline]
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}

/// Single-threaded TTL-LRU core: hash index + raw pointer linked list.
///
/// Keys are cloned once into the list node (the index owns a second clone);
/// values are `Arc<V>` so callers can keep references after eviction.
/// All operations except `remove_expired` and `clear` are O(1).
///
/// Thread safety is provided by the [`ConcurrentTtlLruCache`] wrapper.
pub struct TtlLruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    map: FxHashMap<K, NonNull<Node<K, V>>>,
    head: Option<NonNull<Node<K, V>>>,
    tail: Option<NonNull<Node<K, V>>>,
    capacity: usize,
    default_ttl: Duration,
    stats: CacheStats,
}

// SAFETY: TtlLruCore can be sent between threads if K and V are Send.
// The raw pointers only reference heap memory owned by the struct.
unsafe impl<K, V> Send for TtlLruCore<K, V>
where
    K: Eq + Hash + Clone + Send,
    V: Send,
{
}

// SAFETY: TtlLruCore can be shared between threads if K and V are Sync.
// Actual thread-safety is provided by the RwLock in ConcurrentTtlLruCache.
unsafe impl<K, V> Sync for TtlLruCore<K, V>
where
    K: Eq + Hash + Clone + Sync,
    V: Sync,
{
}

impl<K, V> TtlLruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a new core with the given capacity and default TTL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero or `default_ttl` is the
    /// zero duration. Validation happens before any allocation.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    ///
    /// use ttlkit::policy::ttl_lru::TtlLruCore;
    ///
    /// let cache: TtlLruCore<u32, String> =
    ///     TtlLruCore::try_new(100, Duration::from_secs(300)).unwrap();
    /// ```
    pub fn try_new(capacity: usize, default_ttl: Duration) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be greater than zero"));
        }
        if default_ttl.is_zero() {
            return Err(ConfigError::new("default_ttl must be greater than zero"));
        }

        Ok(TtlLruCore {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            head: None,
            tail: None,
            capacity,
            default_ttl,
            stats: CacheStats::new(),
        })
    }

    /// Returns the default TTL applied by [`insert`](CoreCache::insert).
    #[inline]
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Returns a read-only view of the cumulative counters.
    #[inline]
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Returns a consistent snapshot of counters and gauges.
    ///
    /// `current_size` counts every indexed entry, including expired entries
    /// not yet removed by a read or a sweep.
    pub fn stats_snapshot(&self) -> CacheStatsSnapshot {
        self.stats.snapshot(self.map.len(), self.capacity)
    }

    /// Inserts with a per-entry TTL override instead of the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a zero `ttl`; nothing is mutated in that
    /// case. (An immediately-expired insert is rejected rather than stored.)
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// use ttlkit::policy::ttl_lru::TtlLruCore;
    ///
    /// let mut cache = TtlLruCore::try_new(10, Duration::from_secs(300)).unwrap();
    /// cache
    ///     .insert_with_ttl("session", Arc::new(42u64), Duration::from_secs(5))
    ///     .unwrap();
    /// assert!(cache.insert_with_ttl("bad", Arc::new(0u64), Duration::ZERO).is_err());
    /// ```
    pub fn insert_with_ttl(
        &mut self,
        key: K,
        value: Arc<V>,
        ttl: Duration,
    ) -> Result<Option<Arc<V>>, ConfigError> {
        if ttl.is_zero() {
            return Err(ConfigError::new("ttl must be greater than zero"));
        }
        Ok(self.insert_entry(key, value, ttl))
    }

    /// Read-only lookup without recency update or stats accounting.
    ///
    /// Returns `None` for an expired entry but does not remove it; the next
    /// `get` or sweep will.
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
    /// let mut cache = TtlLruCore::try_new(3, Duration::from_secs(300)).unwrap();
    /// cache.insert(1, Arc::new("first"));
    /// cache.insert(2, Arc::new("second"));
    ///
    /// // Peek doesn't refresh recency: key 1 is still the LRU victim.
    /// assert_eq!(cache.peek(&1).as_deref(), Some(&"first"));
    /// cache.insert(3, Arc::new("third"));
    /// cache.insert(4, Arc::new("fourth"));
    /// assert!(!cache.contains(&1));
    /// ```
    pub fn peek(&self, key: &K) -> Option<Arc<V>> {
        let &node_ptr = self.map.get(key)?;
        let node = unsafe { node_ptr.as_ref() };
        if node.is_expired(Instant::now()) {
            return None;
        }
        Some(Arc::clone(&node.value))
    }

    /// Validates the index/list consistency invariants.
    ///
    /// Walks the recency list from the head, checking that every node is
    /// indexed, that no cycle exists, and that list and index agree on the
    /// entry count.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.map.is_empty() {
            if self.head.is_some() || self.tail.is_some() {
                return Err(InvariantError::new("empty index with non-empty list"));
            }
            return Ok(());
        }

        let mut count = 0usize;
        let mut current = self.head;
        while let Some(ptr) = current {
            count += 1;
            if count > self.map.len() {
                return Err(InvariantError::new("cycle detected in recency list"));
            }
            let node = unsafe { ptr.as_ref() };
            if !self.map.contains_key(&node.key) {
                return Err(InvariantError::new("list node missing from index"));
            }
            if node.next.is_none() && self.tail != Some(ptr) {
                return Err(InvariantError::new("list end does not match tail"));
            }
            current = node.next;
        }

        if count != self.map.len() {
            return Err(InvariantError::new(format!(
                "list length {} != index length {}",
                count,
                self.map.len()
            )));
        }
        Ok(())
    }

    /// Detach a node from the linked list without removing it from the map.
    #[inline(always)]
    fn detach(&mut self, node_ptr: NonNull<Node<K, V>>) {
        unsafe {
            let node = node_ptr.as_ref();
            let prev = node.prev;
            let next = node.next;

            match prev {
                Some(mut p) => p.as_mut().next = next,
                None => self.head = next,
            }

            match next {
                Some(mut n) => n.as_mut().prev = prev,
                None => self.tail = prev,
            }
        }
    }

    /// Attach a node at the front (MRU position).
    #[inline(always)]
    fn attach_front(&mut self, mut node_ptr: NonNull<Node<K, V>>) {
        unsafe {
            let node = node_ptr.as_mut();
            node.prev = None;
            node.next = self.head;

            match self.head {
                Some(mut h) => h.as_mut().prev = Some(node_ptr),
                None => self.tail = Some(node_ptr),
            }

            self.head = Some(node_ptr);
        }
    }

    /// Pop the tail node (LRU) and return it. Does not touch the map.
    #[inline(always)]
    fn pop_tail(&mut self) -> Option<Box<Node<K, V>>> {
        self.tail.map(|tail_ptr| unsafe {
            let node = Box::from_raw(tail_ptr.as_ptr());

            self.tail = node.prev;
            match self.tail {
                Some(mut t) => t.as_mut().next = None,
                None => self.head = None,
            }

            node
        })
    }

    /// Unlink a node from both structures, reclaiming the allocation.
    #[inline]
    fn unlink(&mut self, node_ptr: NonNull<Node<K, V>>) -> Box<Node<K, V>> {
        self.detach(node_ptr);
        let node = unsafe { Box::from_raw(node_ptr.as_ptr()) };
        self.map.remove(&node.key);
        node
    }

    /// Shared insert path; `ttl` has already been validated.
    fn insert_entry(&mut self, key: K, value: Arc<V>, ttl: Duration) -> Option<Arc<V>> {
        let now = Instant::now();

        // Overwrite: refresh value, deadline, and recency. Never evicts.
        if let Some(&node_ptr) = self.map.get(&key) {
            let previous = unsafe {
                let node = &mut *node_ptr.as_ptr();
                node.expires_at = now + ttl;
                node.created_at = now;
                std::mem::replace(&mut node.value, value)
            };

            self.detach(node_ptr);
            self.attach_front(node_ptr);

            self.validate_invariants();
            return Some(previous);
        }

        // New key at capacity: exactly one LRU eviction suffices, since the
        // count only ever grows by one.
        if self.map.len() >= self.capacity {
            if let Some(evicted) = self.pop_tail() {
                self.map.remove(&evicted.key);
                self.stats.record_eviction();
            }
        }

        let node = Box::new(Node {
            prev: None,
            next: None,
            key: key.clone(),
            value,
            expires_at: now + ttl,
            created_at: now,
        });
        let node_ptr = NonNull::new(Box::into_raw(node)).unwrap();

        self.map.insert(key, node_ptr);
        self.attach_front(node_ptr);

        self.validate_invariants();
        None
    }

    /// Debug-build invariant assertion after every mutation.
    #[inline]
    fn validate_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            if let Err(err) = self.check_invariants() {
                panic!("invariant violated: {}", err);
            }
        }
    }
}

impl<K, V> CoreCache<K, Arc<V>> for TtlLruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Inserts with the cache-wide default TTL.
    #[inline]
    fn insert(&mut self, key: K, value: Arc<V>) -> Option<Arc<V>> {
        let ttl = self.default_ttl;
        self.insert_entry(key, value, ttl)
    }

    /// Lazy-expiring get: an expired entry is removed and reported absent.
    #[inline]
    fn get(&mut self, key: &K) -> Option<&Arc<V>> {
        let node_ptr = match self.map.get(key) {
            Some(&ptr) => ptr,
            None => {
                self.stats.record_miss();
                return None;
            },
        };

        // Lazy expiry check on every read: an expired-but-unswept entry must
        // never be observed as a hit.
        if unsafe { node_ptr.as_ref().is_expired(Instant::now()) } {
            self.unlink(node_ptr);
            self.stats.record_expired_removal();
            self.stats.record_miss();
            self.validate_invariants();
            return None;
        }

        self.stats.record_hit();
        self.detach(node_ptr);
        self.attach_front(node_ptr);

        self.validate_invariants();

        unsafe { Some(&(*node_ptr.as_ptr()).value) }
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        match self.map.get(key) {
            Some(&node_ptr) => !unsafe { node_ptr.as_ref() }.is_expired(Instant::now()),
            None => false,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        while let Some(node) = self.pop_tail() {
            self.map.remove(&node.key);
        }
        self.map.clear();

        self.validate_invariants();
    }
}

impl<K, V> MutableCache<K, Arc<V>> for TtlLruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<Arc<V>> {
        let &node_ptr = self.map.get(key)?;
        let node = self.unlink(node_ptr);

        self.validate_invariants();

        Some(node.value)
    }
}

impl<K, V> TtlLruCacheTrait<K, Arc<V>> for TtlLruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lru(&mut self) -> Option<(K, Arc<V>)> {
        let now = Instant::now();
        loop {
            let expired = unsafe { self.tail?.as_ref().is_expired(now) };
            let node = self.pop_tail()?;
            self.map.remove(&node.key);

            if expired {
                self.stats.record_expired_removal();
                continue;
            }

            self.validate_invariants();
            return Some((node.key, node.value));
        }
    }

    fn peek_lru(&self) -> Option<(&K, &Arc<V>)> {
        let now = Instant::now();
        let mut current = self.tail;
        while let Some(ptr) = current {
            let node = unsafe { &*ptr.as_ptr() };
            if !node.is_expired(now) {
                return Some((&node.key, &node.value));
            }
            current = node.prev;
        }
        None
    }

    fn touch(&mut self, key: &K) -> bool {
        let node_ptr = match self.map.get(key) {
            Some(&ptr) => ptr,
            None => return false,
        };

        if unsafe { node_ptr.as_ref().is_expired(Instant::now()) } {
            self.unlink(node_ptr);
            self.stats.record_expired_removal();
            self.validate_invariants();
            return false;
        }

        self.detach(node_ptr);
        self.attach_front(node_ptr);

        self.validate_invariants();
        true
    }

    fn expires_in(&self, key: &K) -> Option<Duration> {
        let &node_ptr = self.map.get(key)?;
        let node = unsafe { node_ptr.as_ref() };
        let now = Instant::now();
        if node.is_expired(now) {
            return None;
        }
        node.expires_at.checked_duration_since(now)
    }

    fn age(&self, key: &K) -> Option<Duration> {
        let &node_ptr = self.map.get(key)?;
        let node = unsafe { node_ptr.as_ref() };
        let now = Instant::now();
        if node.is_expired(now) {
            return None;
        }
        Some(now.duration_since(node.created_at))
    }

    fn remove_expired(&mut self) -> usize {
        let now = Instant::now();
        let mut removed = 0usize;

        // Walk from the tail; read the predecessor before the node is freed.
        let mut current = self.tail;
        while let Some(ptr) = current {
            let (prev, expired) = unsafe {
                let node = ptr.as_ref();
                (node.prev, node.is_expired(now))
            };

            if expired {
                self.unlink(ptr);
                self.stats.record_expired_removal();
                removed += 1;
            }

            current = prev;
        }

        self.validate_invariants();
        removed
    }
}

// Free all heap-allocated nodes when the core is dropped.
impl<K, V> Drop for TtlLruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    fn drop(&mut self) {
        while self.pop_tail().is_some() {}
    }
}

impl<K, V> fmt::Debug for TtlLruCore<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtlLruCore")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("default_ttl", &self.default_ttl)
            .finish_non_exhaustive()
    }
}

impl<K, V> Extend<(K, Arc<V>)> for TtlLruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Inserts every pair with the default TTL.
    fn extend<T: IntoIterator<Item = (K, Arc<V>)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Thread-safe TTL-LRU cache: the core behind `parking_lot::RwLock`, plus a
/// background expiry sweeper scoped to the cache's lifetime.
///
/// Cloning shares the same underlying cache and sweeper. The sweeper thread
/// holds only a `Weak` reference, so dropping the last handle stops and joins
/// it; [`stop_sweeper`](Self::stop_sweeper) stops it early while all data
/// operations keep working (lazy expiry on `get` remains correct).
pub struct ConcurrentTtlLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    core: Arc<RwLock<TtlLruCore<K, V>>>,
    sweeper: Arc<SweepHandle>,
}

impl<K, V> Clone for ConcurrentTtlLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn clone(&self) -> Self {
        ConcurrentTtlLruCache {
            core: Arc::clone(&self.core),
            sweeper: Arc::clone(&self.sweeper),
        }
    }
}

impl<K, V> fmt::Debug for ConcurrentTtlLruCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.core.read();
        f.debug_struct("ConcurrentTtlLruCache")
            .field("len", &core.len())
            .field("capacity", &core.capacity())
            .field("default_ttl", &core.default_ttl())
            .finish_non_exhaustive()
    }
}

impl<K, V> ConcurrentTtlLruCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    /// Creates a thread-safe cache and starts its sweeper with
    /// [`DEFAULT_CLEANUP_INTERVAL`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero or `default_ttl` is the
    /// zero duration.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use ttlkit::policy::ttl_lru::ConcurrentTtlLruCache;
    ///
    /// let cache: ConcurrentTtlLruCache<u32, String> =
    ///     ConcurrentTtlLruCache::try_new(100, Duration::from_secs(300)).unwrap();
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    /// ```
    pub fn try_new(capacity: usize, default_ttl: Duration) -> Result<Self, ConfigError> {
        Self::try_with_cleanup_interval(capacity, default_ttl, DEFAULT_CLEANUP_INTERVAL)
    }

    /// Creates a thread-safe cache with an explicit sweep interval.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a zero `capacity`, `default_ttl`, or
    /// `cleanup_interval`.
    pub fn try_with_cleanup_interval(
        capacity: usize,
        default_ttl: Duration,
        cleanup_interval: Duration,
    ) -> Result<Self, ConfigError> {
        if cleanup_interval.is_zero() {
            return Err(ConfigError::new("cleanup_interval must be greater than zero"));
        }

        let core = Arc::new(RwLock::new(TtlLruCore::try_new(capacity, default_ttl)?));
        let sweeper = Arc::new(sweep::spawn_sweeper(Arc::downgrade(&core), cleanup_interval));

        Ok(ConcurrentTtlLruCache { core, sweeper })
    }

    /// Inserts with the default TTL, wrapping the value in `Arc<V>`.
    ///
    /// Returns the previous `Arc<V>` if the key existed.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use ttlkit::policy::ttl_lru::ConcurrentTtlLruCache;
    ///
    /// let cache: ConcurrentTtlLruCache<u32, String> =
    ///     ConcurrentTtlLruCache::try_new(100, Duration::from_secs(300)).unwrap();
    ///
    /// let old = cache.insert(1, "first".to_string());
    /// assert!(old.is_none());
    ///
    /// let old = cache.insert(1, "updated".to_string());
    /// assert_eq!(*old.unwrap(), "first");
    /// ```
    pub fn insert(&self, key: K, value: V) -> Option<Arc<V>> {
        let value_arc = Arc::new(value);
        self.core.write().insert(key, value_arc)
    }

    /// Inserts a pre-wrapped `Arc<V>` with the default TTL.
    pub fn insert_arc(&self, key: K, value: Arc<V>) -> Option<Arc<V>> {
        self.core.write().insert(key, value)
    }

    /// Inserts with a per-entry TTL override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a zero `ttl`; nothing is mutated.
    pub fn insert_with_ttl(
        &self,
        key: K,
        value: V,
        ttl: Duration,
    ) -> Result<Option<Arc<V>>, ConfigError> {
        self.core.write().insert_with_ttl(key, Arc::new(value), ttl)
    }

    /// Lazy-expiring get; refreshes recency, so it takes the write lock.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.core.write().get(key).map(Arc::clone)
    }

    /// Read-only lookup under the read lock; no recency or stats update.
    pub fn peek(&self, key: &K) -> Option<Arc<V>> {
        self.core.read().peek(key)
    }

    /// Removes an entry, returning its value if it was present.
    pub fn remove(&self, key: &K) -> Option<Arc<V>> {
        self.core.write().remove(key)
    }

    /// Checks for a live entry without affecting recency order.
    pub fn contains(&self, key: &K) -> bool {
        self.core.read().contains(key)
    }

    /// Current entry count, including expired-but-unswept entries.
    pub fn len(&self) -> usize {
        self.core.read().len()
    }

    /// Returns `true` if the cache contains no entries.
    pub fn is_empty(&self) -> bool {
        self.core.read().is_empty()
    }

    /// Maximum capacity.
    pub fn capacity(&self) -> usize {
        self.core.read().capacity()
    }

    /// Default TTL applied by [`insert`](Self::insert).
    pub fn default_ttl(&self) -> Duration {
        self.core.read().default_ttl()
    }

    /// Removes all entries. Cumulative statistics are not reset.
    pub fn clear(&self) {
        self.core.write().clear();
    }

    /// Removes and returns the least recently used live entry.
    pub fn pop_lru(&self) -> Option<(K, Arc<V>)> {
        self.core.write().pop_lru()
    }

    /// Moves a live entry to the MRU position without retrieving it.
    pub fn touch(&self, key: &K) -> bool {
        self.core.write().touch(key)
    }

    /// Remaining validity of a live entry.
    pub fn expires_in(&self, key: &K) -> Option<Duration> {
        self.core.read().expires_in(key)
    }

    /// Time since a live entry was created or last overwritten.
    pub fn age(&self, key: &K) -> Option<Duration> {
        self.core.read().age(key)
    }

    /// Runs one expiry pass immediately, returning the removal count.
    ///
    /// The background sweeper runs this same pass every cleanup interval.
    pub fn remove_expired(&self) -> usize {
        self.core.write().remove_expired()
    }

    /// Consistent snapshot of counters and gauges.
    pub fn stats_snapshot(&self) -> CacheStatsSnapshot {
        self.core.read().stats_snapshot()
    }

    /// Validates index/list consistency. Intended for tests and debugging.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.core.read().check_invariants()
    }

    /// Stops the background sweeper and joins its thread.
    ///
    /// Idempotent. All data operations keep functioning afterwards; lazy
    /// expiry on `get` remains the correctness backstop.
    pub fn stop_sweeper(&self) {
        self.sweeper.stop();
    }

    /// Whether the sweeper has been stopped (explicitly or by teardown).
    pub fn sweeper_stopped(&self) -> bool {
        self.sweeper.is_stopped()
    }
}
