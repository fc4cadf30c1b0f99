//! Keyed TTL cache for memoizing feed calls.
//!
//! A mapping from `(operation, serialized args)` keys to values with a
//! fixed time-to-live. Entries past their TTL are dropped on access and
//! the caller refetches; `clear` empties the table in bulk, which is
//! how the explicit user refresh forces the next access to miss.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use log::warn;

/// Build a cache key from an operation id and its serialized arguments.
pub fn cache_key(operation: &str, args: &[&str]) -> String {
    let mut key = String::from(operation);
    for arg in args {
        key.push(':');
        key.push_str(arg);
    }
    key
}

#[derive(Debug)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

/// Keyed value cache with one time-to-live for all entries.
///
/// Thread-safe; the table lives for the process lifetime and is only
/// emptied by TTL expiry or an explicit [`clear`](Self::clear). There
/// is no eviction beyond that - the key space here is a handful of
/// operations, not an unbounded set.
pub struct TtlCache<V> {
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
    ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Lock the entries mutex, recovering from poison if necessary.
    ///
    /// Recovering is safe here: the worst case is serving a quote the
    /// poisoning writer had half-installed, and entries are replaced
    /// wholesale on insert.
    fn lock_entries(&self) -> MutexGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            warn!("Cache entries mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Look up a live entry for the key.
    ///
    /// An entry whose TTL has elapsed is removed and reported as a
    /// miss, so the caller fetches and replaces it.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.lock_entries();

        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store a value under the key, replacing any previous entry.
    pub fn insert(&self, key: impl Into<String>, value: V) {
        let mut entries = self.lock_entries();
        entries.insert(
            key.into(),
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Drop every entry; the next access for any key is a miss
    /// regardless of how recently it was stored.
    pub fn clear(&self) {
        self.lock_entries().clear();
    }

    /// Number of entries currently stored, live or expired.
    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
