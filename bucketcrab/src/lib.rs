//! # BucketCrab
//!
//! A per-key token bucket rate limiter for Rust.
//!
//! ## Overview
//!
//! BucketCrab admits or rejects requests per subject key (a user id, an API
//! key, an IP address) so that no key exceeds a sustained rate with a bounded
//! burst allowance:
//! - **Continuous refill**: tokens accrue fractionally with elapsed time, not
//!   in discrete ticks
//! - **Bounded bursts**: a bucket never holds more than its configured capacity
//! - **Thread-safe by construction**: one limiter is shared by any number of
//!   concurrent callers, with per-key linearizability
//! - **Memory efficiency**: O(1) space per key
//!
//! ## Quick Start
//!
//! ```
//! use bucketcrab::TokenBucketLimiter;
//!
//! // 20 tokens of burst, refilled at 5 tokens per second
//! let limiter = TokenBucketLimiter::new(20, 5.0).unwrap();
//!
//! if limiter.accept("user:123") {
//!     // handle the request
//! } else {
//!     // reject it (e.g. HTTP 429)
//! }
//! ```
//!
//! ## Store Types
//!
//! The limiter keeps per-key state in a [`Store`]. Two implementations are
//! provided:
//!
//! ### [`ShardedStore`]
//! The default. Partitions keys across many lock-guarded shards so callers on
//! different keys rarely contend.
//!
//! ```
//! use bucketcrab::ShardedStore;
//!
//! let store = ShardedStore::builder()
//!     .capacity(1_000_000)
//!     .shard_count(64)
//!     .build();
//! ```
//!
//! ### [`CoarseStore`]
//! A single lock over the whole table. Correct, but serializes all keys;
//! useful as a baseline for comparison.
//!
//! ```
//! use bucketcrab::{CoarseStore, TokenBucketLimiter};
//!
//! let limiter = TokenBucketLimiter::with_store(10, 10.0, CoarseStore::new()).unwrap();
//! ```
//!
//! ## Thread Safety
//!
//! Admission takes `&self`, so a limiter is shared directly:
//!
//! ```
//! use std::sync::Arc;
//! use bucketcrab::TokenBucketLimiter;
//!
//! let limiter = Arc::new(TokenBucketLimiter::new(10, 10.0).unwrap());
//!
//! let handle = limiter.clone();
//! std::thread::spawn(move || {
//!     handle.accept("user:123");
//! })
//! .join()
//! .unwrap();
//! ```
//!
//! Concurrent calls on the same key serialize on that key's shard; the bucket
//! evolves as if every call ran one at a time. Calls on different keys
//! proceed in parallel.
//!
//! ## Features
//!
//! - `ahash` (default): Use AHash for faster hashing

pub mod core;

pub use core::{
    BucketState, CoarseStore, ConfigError, LimiterConfig, ShardedStore, ShardedStoreBuilder, Store,
    TokenBucketLimiter,
};

// Re-export the store module so benchmarks can access it
pub use crate::core::store;
