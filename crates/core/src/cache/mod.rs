//! Time-bounded memoization for upstream fetches.

mod ttl_cache;

pub use ttl_cache::{cache_key, TtlCache};
