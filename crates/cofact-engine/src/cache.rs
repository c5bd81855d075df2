//! Shared memoization cache for determinant results.
//!
//! One cache instance is shared by every strategy in a run and consulted
//! on each memoized call. Entries are never evicted; callers clear the
//! cache between timed trials to force cold measurements.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::key::MatrixKey;

/// A concurrent map from matrix contents to their determinant.
///
/// Lookups take a read lock, inserts a write lock; neither is held while
/// a determinant is being computed, so concurrent misses for the same
/// key may duplicate work. The computation is pure, so duplicates write
/// the identical value and the race costs time, never correctness.
#[derive(Debug, Default)]
pub struct DetCache {
    entries: RwLock<FxHashMap<MatrixKey, i64>>,
}

impl DetCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    /// Looks up the determinant stored under `key`.
    #[must_use]
    pub fn get(&self, key: &MatrixKey) -> Option<i64> {
        self.entries.read().get(key).copied()
    }

    /// Stores a determinant under `key`, replacing any previous value.
    pub fn insert(&self, key: MatrixKey, determinant: i64) {
        self.entries.write().insert(key, determinant);
    }

    /// Returns the number of cached determinants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing has been cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drops every entry, restoring the cold state.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
