use super::{BucketState, Store};
use std::sync::Mutex;

#[cfg(feature = "ahash")]
use ahash::AHashMap as HashMap;
#[cfg(not(feature = "ahash"))]
use std::collections::HashMap;

const DEFAULT_CAPACITY: usize = 1000;
const CAPACITY_OVERHEAD_FACTOR: f64 = 1.3;

/// Single-lock store
///
/// Guards the whole key table with one mutex. Every update excludes every
/// other caller, so per-key atomicity holds trivially, at the cost of
/// cross-key parallelism. Prefer [`ShardedStore`](super::ShardedStore) under
/// concurrent load; this store is the baseline the benchmarks compare it
/// against.
pub struct CoarseStore {
    data: Mutex<HashMap<String, BucketState>>,
}

impl CoarseStore {
    /// Create a new CoarseStore with default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a new CoarseStore sized for the expected number of unique keys
    ///
    /// The store will allocate 30% more space to reduce hash collisions.
    pub fn with_capacity(capacity: usize) -> Self {
        CoarseStore {
            data: Mutex::new(HashMap::with_capacity(
                (capacity as f64 * CAPACITY_OVERHEAD_FACTOR) as usize,
            )),
        }
    }
}

impl Default for CoarseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for CoarseStore {
    fn update<T>(&self, key: &str, f: impl FnOnce(Option<BucketState>) -> (BucketState, T)) -> T {
        let mut data = self.data.lock().unwrap();

        let (next, out) = f(data.get(key).copied());
        match data.get_mut(key) {
            Some(slot) => *slot = next,
            None => {
                data.insert(key.to_string(), next);
            }
        }
        out
    }

    fn get(&self, key: &str) -> Option<BucketState> {
        self.data.lock().unwrap().get(key).copied()
    }

    fn len(&self) -> usize {
        self.data.lock().unwrap().len()
    }
}
