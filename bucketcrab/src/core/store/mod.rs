use std::time::Instant;


mod coarse;
mod sharded;

pub use coarse::CoarseStore;
pub use sharded::{ShardedStore, ShardedStoreBuilder};

/// Per-key token bucket state
///
/// One `BucketState` exists per subject key, created the first time the key
/// is seen and replaced in place on every admission check afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketState {
    /// Tokens currently available, always within `0.0..=capacity`
    pub tokens: f64,
    /// Instant the state was last recomputed
    pub last_update: Instant,
}

/// Store trait for concurrent per-key bucket state
///
/// An implementation is the synchronization point of the limiter: updates to
/// the same key must be mutually exclusive (two concurrent [`update`] calls
/// never act on the same stale state), while updates to distinct keys should
/// proceed in parallel. Entries are inserted on first sighting and never
/// removed.
///
/// [`update`]: Store::update
pub trait Store {
    /// Atomically read-modify-write the state for `key`
    ///
    /// The closure receives the current state, or `None` for a key that has
    /// never been seen, and returns the replacement state together with a
    /// value handed back to the caller. The closure runs while the entry is
    /// exclusively held, so it must stay cheap: no I/O, no blocking.
    fn update<T>(&self, key: &str, f: impl FnOnce(Option<BucketState>) -> (BucketState, T)) -> T;

    /// Read the current state for `key` without modifying it
    fn get(&self, key: &str) -> Option<BucketState>;

    /// Number of keys tracked by the store
    fn len(&self) -> usize;

    /// Whether the store tracks no keys
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
