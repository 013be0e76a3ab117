//! Process-lifetime memoization store for Fibonacci values.
//!
//! Maps an index to its exact arbitrary-precision Fibonacci number. Entries
//! are inserted by successful computation only and are never evicted or
//! overwritten, so the map grows monotonically for the life of the process.
//! Indices 0 and 1 are base cases handled outside the cache; only indices
//! ≥ 2 are ever stored.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use num_bigint::BigUint;

/// Memoization store. Invariant: a present entry holds the exact Fibonacci
/// number for its index.
#[derive(Debug, Default)]
pub struct FibCache {
    entries: HashMap<u64, BigUint>,
}

impl FibCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the value for `index`, if present.
    pub fn get(&self, index: u64) -> Option<&BigUint> {
        self.entries.get(&index)
    }

    /// Store `value` for `index`.
    ///
    /// Idempotent: an existing entry is kept as-is. A present value is
    /// already correct by construction, so there is nothing to replace.
    pub fn put(&mut self, index: u64, value: BigUint) {
        self.entries.entry(index).or_insert(value);
    }

    /// Whether `index` has a cached value.
    pub fn contains(&self, index: u64) -> bool {
        self.entries.contains_key(&index)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cache shared across concurrent request handlers.
///
/// All access goes through the mutex; the lock is held for the duration of
/// a computation, serializing overlapping cold-range requests.
pub type SharedFibCache = Arc<Mutex<FibCache>>;

/// Create an empty shared cache.
pub fn shared() -> SharedFibCache {
    Arc::new(Mutex::new(FibCache::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cache_is_empty() {
        let cache = FibCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert!(cache.get(2).is_none());
    }

    #[test]
    fn test_put_and_get() {
        let mut cache = FibCache::new();
        cache.put(2, BigUint::from(1u32));
        cache.put(3, BigUint::from(2u32));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(3), Some(&BigUint::from(2u32)));
        assert!(cache.contains(2));
        assert!(!cache.contains(4));
    }

    #[test]
    fn test_put_is_idempotent() {
        let mut cache = FibCache::new();
        cache.put(5, BigUint::from(5u32));
        // A second put for the same index must not overwrite.
        cache.put(5, BigUint::from(99u32));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(5), Some(&BigUint::from(5u32)));
    }

    #[test]
    fn test_shared_cache_is_usable_across_clones() {
        let cache = shared();
        let other = Arc::clone(&cache);
        cache
            .lock()
            .expect("fib cache lock poisoned")
            .put(2, BigUint::from(1u32));
        assert_eq!(other.lock().expect("fib cache lock poisoned").len(), 1);
    }
}
