//! Cache eviction policies.
//!
//! ttlkit ships a single policy: TTL-bounded LRU ([`ttl_lru`]).

pub mod ttl_lru;
