//! Builder for TTL-LRU caches.
//!
//! Collects the configuration surface (`capacity`, `default_ttl`,
//! `cleanup_interval`) and validates it in one place, producing either the
//! single-threaded core or the concurrent cache with its sweeper running.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use ttlkit::builder::TtlCacheBuilder;
//! use ttlkit::traits::CoreCache;
//!
//! let mut cache = TtlCacheBuilder::new(100)
//!     .default_ttl(Duration::from_secs(120))
//!     .try_build::<u64, String>()
//!     .unwrap();
//! cache.insert(1, std::sync::Arc::new("hello".to_string()));
//! assert_eq!(cache.len(), 1);
//! ```

use std::hash::Hash;
use std::time::Duration;

use crate::error::ConfigError;
use crate::policy::ttl_lru::{ConcurrentTtlLruCache, TtlLruCore};
use crate::sweep::DEFAULT_CLEANUP_INTERVAL;

/// Default entry validity when the builder is not told otherwise.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Builder for creating TTL-LRU cache instances.
#[derive(Debug, Clone)]
pub struct TtlCacheBuilder {
    capacity: usize,
    default_ttl: Duration,
    cleanup_interval: Duration,
}

impl TtlCacheBuilder {
    /// Creates a builder with the given capacity, [`DEFAULT_TTL`], and
    /// [`DEFAULT_CLEANUP_INTERVAL`].
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            default_ttl: DEFAULT_TTL,
            cleanup_interval: DEFAULT_CLEANUP_INTERVAL,
        }
    }

    /// Sets the default validity applied to inserts without a per-call TTL.
    pub fn default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    /// Sets the background sweep interval for
    /// [`try_build_concurrent`](Self::try_build_concurrent).
    pub fn cleanup_interval(mut self, interval: Duration) -> Self {
        self.cleanup_interval = interval;
        self
    }

    /// Builds a single-threaded [`TtlLruCore`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` or `default_ttl` is zero.
    pub fn try_build<K, V>(self) -> Result<TtlLruCore<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        TtlLruCore::try_new(self.capacity, self.default_ttl)
    }

    /// Builds a [`ConcurrentTtlLruCache`] with its sweeper running.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity`, `default_ttl`, or
    /// `cleanup_interval` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::time::Duration;
    ///
    /// use ttlkit::builder::TtlCacheBuilder;
    ///
    /// let cache = TtlCacheBuilder::new(100)
    ///     .default_ttl(Duration::from_secs(60))
    ///     .cleanup_interval(Duration::from_secs(5))
    ///     .try_build_concurrent::<u64, String>()
    ///     .unwrap();
    /// cache.insert(1, "hello".to_string());
    /// assert!(cache.contains(&1));
    /// ```
    pub fn try_build_concurrent<K, V>(self) -> Result<ConcurrentTtlLruCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone + Send + Sync + 'static,
        V: Send + Sync + 'static,
    {
        ConcurrentTtlLruCache::try_with_cleanup_interval(
            self.capacity,
            self.default_ttl,
            self.cleanup_interval,
        )
    }
}
