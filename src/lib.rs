//! ttlkit: TTL-aware LRU cache primitives.
//!
//! A single-policy, in-process cache combining size-bounded LRU eviction with
//! per-entry TTL expiration. See [`policy::ttl_lru`] for the engine and
//! [`sweep`] for the background expiry sweeper.

pub mod builder;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod stats;
pub mod sweep;
pub mod traits;
