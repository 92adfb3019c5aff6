pub use crate::builder::{TtlCacheBuilder, DEFAULT_TTL};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::policy::ttl_lru::{ConcurrentTtlLruCache, TtlLruCore};
pub use crate::stats::{CacheStats, CacheStatsSnapshot};
pub use crate::sweep::{SweepHandle, DEFAULT_CLEANUP_INTERVAL};
pub use crate::traits::{CoreCache, MutableCache, TtlLruCacheTrait};
