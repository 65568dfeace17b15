//! Token bucket rate limiter implementation
//!
//! This module provides the main [`TokenBucketLimiter`] struct: one bucket
//! per subject key, lazily refilled at admission time, with per-key
//! linearizability under concurrent callers.

use super::{ConfigError, LimiterConfig};
use super::store::{BucketState, ShardedStore, Store};
use std::time::Instant;

/// Per-key token bucket rate limiter
///
/// Each subject key owns a bucket holding up to `capacity` tokens. A request
/// is admitted when its key's bucket holds at least one token after the lazy
/// refill, and the admission deducts exactly one token. Buckets refill
/// continuously at `refill_rate` tokens per second of elapsed monotonic
/// time; tokens are fractional, never quantized.
///
/// The limiter is shared directly between threads: [`accept`] takes `&self`
/// and the store serializes concurrent updates per key. See the
/// [crate docs](crate) for the concurrency contract.
///
/// [`accept`]: TokenBucketLimiter::accept
///
/// # Example
///
/// ```
/// use bucketcrab::TokenBucketLimiter;
///
/// // 10 tokens of burst, refilled at 10 tokens per second
/// let limiter = TokenBucketLimiter::new(10, 10.0).unwrap();
///
/// assert!(limiter.accept("user:123"));
/// ```
pub struct TokenBucketLimiter<S = ShardedStore> {
    config: LimiterConfig,
    store: S,
}

impl TokenBucketLimiter<ShardedStore> {
    /// Create a limiter backed by the default [`ShardedStore`]
    ///
    /// # Parameters
    ///
    /// - `capacity`: maximum burst size, greater than zero
    /// - `refill_rate`: tokens added per second, finite and non-negative
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidCapacity`] when `capacity <= 0`
    /// - [`ConfigError::InvalidRefillRate`] when `refill_rate` is negative,
    ///   NaN, or infinite
    ///
    /// # Example
    ///
    /// ```
    /// use bucketcrab::TokenBucketLimiter;
    ///
    /// let limiter = TokenBucketLimiter::new(100, 25.0).unwrap();
    /// assert_eq!(limiter.capacity(), 100);
    /// assert_eq!(limiter.refill_rate(), 25.0);
    /// ```
    pub fn new(capacity: i64, refill_rate: f64) -> Result<Self, ConfigError> {
        Ok(TokenBucketLimiter {
            config: LimiterConfig::new(capacity, refill_rate)?,
            store: ShardedStore::new(),
        })
    }
}

impl Default for TokenBucketLimiter<ShardedStore> {
    /// The default policy: 10 tokens of burst, 10 tokens per second
    fn default() -> Self {
        TokenBucketLimiter {
            config: LimiterConfig::default(),
            store: ShardedStore::new(),
        }
    }
}

impl<S: Store> TokenBucketLimiter<S> {
    /// Create a limiter with a specific store implementation
    ///
    /// # Example
    ///
    /// ```
    /// use bucketcrab::{CoarseStore, TokenBucketLimiter};
    ///
    /// let limiter = TokenBucketLimiter::with_store(10, 10.0, CoarseStore::new()).unwrap();
    /// ```
    pub fn with_store(capacity: i64, refill_rate: f64, store: S) -> Result<Self, ConfigError> {
        Ok(TokenBucketLimiter {
            config: LimiterConfig::new(capacity, refill_rate)?,
            store,
        })
    }

    /// Check whether a request for `key` is admitted, charging one token
    ///
    /// Never fails and never blocks on I/O: the verdict is computed from a
    /// clock read, the refill arithmetic, and one atomic table update. Any
    /// string is a valid key, the empty string included.
    ///
    /// # Example
    ///
    /// ```
    /// use bucketcrab::TokenBucketLimiter;
    ///
    /// let limiter = TokenBucketLimiter::new(2, 0.0).unwrap();
    ///
    /// assert!(limiter.accept("user:123"));
    /// assert!(limiter.accept("user:123"));
    /// assert!(!limiter.accept("user:123"));
    /// ```
    pub fn accept(&self, key: &str) -> bool {
        self.accept_at(key, Instant::now())
    }

    /// Check whether a request for `key` is admitted at the given instant
    ///
    /// Same decision as [`accept`](TokenBucketLimiter::accept) with the
    /// clock injected by the caller, which makes refill timing exact in
    /// tests. An instant at or before the bucket's last update refills
    /// nothing: elapsed time saturates at zero rather than going negative.
    pub fn accept_at(&self, key: &str, now: Instant) -> bool {
        let capacity = self.config.capacity() as f64;
        let refill_rate = self.config.refill_rate();

        self.store.update(key, |state| match state {
            None => {
                // New key: the bucket starts full and this request is
                // charged immediately.
                let state = BucketState {
                    tokens: capacity - 1.0,
                    last_update: now,
                };
                (state, true)
            }
            Some(prev) => {
                let elapsed = now.saturating_duration_since(prev.last_update).as_secs_f64();
                let refilled = (prev.tokens + elapsed * refill_rate).min(capacity);

                if refilled >= 1.0 {
                    let state = BucketState {
                        tokens: refilled - 1.0,
                        last_update: now,
                    };
                    (state, true)
                } else {
                    let state = BucketState {
                        tokens: refilled,
                        last_update: now,
                    };
                    (state, false)
                }
            }
        })
    }

    /// Maximum burst size this limiter was configured with
    pub fn capacity(&self) -> i64 {
        self.config.capacity()
    }

    /// Refill rate (tokens per second) this limiter was configured with
    pub fn refill_rate(&self) -> f64 {
        self.config.refill_rate()
    }

    /// Tokens currently recorded for `key`, if the key has been seen
    ///
    /// Read-only: the bucket is not refilled or otherwise touched, so the
    /// value reflects the last admission check, not the current instant.
    pub fn tokens(&self, key: &str) -> Option<f64> {
        self.store.get(key).map(|state| state.tokens)
    }

    /// Number of keys the limiter currently tracks
    ///
    /// Keys are never evicted, so this grows monotonically over the process
    /// lifetime.
    pub fn tracked_keys(&self) -> usize {
        self.store.len()
    }
}
