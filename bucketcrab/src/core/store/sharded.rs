use super::{BucketState, Store};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Mutex;

#[cfg(feature = "ahash")]
use ahash::AHashMap as HashMap;
#[cfg(not(feature = "ahash"))]
use std::collections::HashMap;

// Configuration constants
const DEFAULT_CAPACITY: usize = 1000;
const CAPACITY_OVERHEAD_FACTOR: f64 = 1.3;
const SHARDS_PER_CPU: usize = 4;

/// Lock-sharded store for concurrent access
///
/// This implementation partitions keys across multiple internal hash maps,
/// each guarded by its own lock. Updates to one key serialize on its shard
/// lock; updates to keys in other shards proceed in parallel, preserving
/// cross-key throughput under many concurrent callers.
///
/// # Example
///
/// ```
/// use bucketcrab::ShardedStore;
///
/// let store = ShardedStore::builder()
///     .capacity(100_000)
///     .shard_count(64)
///     .build();
/// ```
pub struct ShardedStore {
    shards: Vec<Mutex<HashMap<String, BucketState>>>,
}

/// Builder for configuring a ShardedStore
///
/// # Example
///
/// ```
/// use bucketcrab::ShardedStore;
///
/// let store = ShardedStore::builder()
///     .capacity(1_000_000)
///     .build();
/// ```
pub struct ShardedStoreBuilder {
    capacity: usize,
    shard_count: usize,
}

impl ShardedStore {
    /// Create a new ShardedStore with default configuration
    ///
    /// Uses four shards per available CPU core for better key distribution,
    /// and a default expected capacity of 1000 keys.
    pub fn new() -> Self {
        Self::with_shard_count(default_shard_count())
    }

    /// Create a new ShardedStore with the given number of shards
    ///
    /// # Panics
    ///
    /// Panics if `shard_count` is zero.
    pub fn with_shard_count(shard_count: usize) -> Self {
        Self::with_config(DEFAULT_CAPACITY, shard_count)
    }

    /// Create a new builder for configuring a ShardedStore
    pub fn builder() -> ShardedStoreBuilder {
        ShardedStoreBuilder {
            capacity: DEFAULT_CAPACITY,
            shard_count: default_shard_count(),
        }
    }

    fn with_config(capacity: usize, shard_count: usize) -> Self {
        assert!(shard_count > 0, "Shard count must be greater than 0");

        // Pre-allocate each shard with overhead to avoid rehashing
        let per_shard = (capacity as f64 * CAPACITY_OVERHEAD_FACTOR) as usize / shard_count + 1;
        let shards = (0..shard_count)
            .map(|_| Mutex::new(HashMap::with_capacity(per_shard)))
            .collect();

        ShardedStore { shards }
    }

    /// Determine which shard a key belongs to
    fn shard_index(&self, key: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % self.shards.len()
    }
}

fn default_shard_count() -> usize {
    let cpu_count = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4);
    cpu_count * SHARDS_PER_CPU
}

impl Default for ShardedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for ShardedStore {
    fn update<T>(&self, key: &str, f: impl FnOnce(Option<BucketState>) -> (BucketState, T)) -> T {
        let shard = &self.shards[self.shard_index(key)];
        let mut data = shard.lock().unwrap();

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
        let shard = &self.shards[self.shard_index(key)];
        let data = shard.lock().unwrap();
        data.get(key).copied()
    }

    fn len(&self) -> usize {
        self.shards.iter().map(|s| s.lock().unwrap().len()).sum()
    }
}

impl Default for ShardedStoreBuilder {
    fn default() -> Self {
        ShardedStoreBuilder {
            capacity: DEFAULT_CAPACITY,
            shard_count: default_shard_count(),
        }
    }
}

impl ShardedStoreBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expected capacity (number of unique keys)
    ///
    /// The store will allocate 30% more space to reduce hash collisions.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the number of shards
    ///
    /// More shards mean less contention between distinct keys at the cost of
    /// a little memory per shard. Must be greater than zero.
    pub fn shard_count(mut self, shard_count: usize) -> Self {
        self.shard_count = shard_count;
        self
    }

    /// Build the ShardedStore with the configured settings
    pub fn build(self) -> ShardedStore {
        ShardedStore::with_config(self.capacity, self.shard_count)
    }
}
